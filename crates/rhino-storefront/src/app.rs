//! Application components and pages.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use rhino_commerce::prelude::*;

use crate::session::StoreSession;
use crate::state::*;

fn use_session() -> RwSignal<StoreSession> {
    expect_context::<RwSignal<StoreSession>>()
}

fn millis(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms))
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = StoreSession::from_env().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Store config unavailable, using defaults");
        StoreSession::default()
    });
    let title = session.store_name().to_string();
    provide_context(RwSignal::new(session));

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="RhinoFuse - AI-enabled diagnostics for your motorcycle"/>
        <Title text=title/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=LandingPage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/checkout") view=CheckoutPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let session = use_session();
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        session.update(|s| {
            s.navigate(&path);
        });
    });

    let store_name = session.with_untracked(|s| s.store_name().to_string());
    let cart_count = move || session.with(|s| s.cart().item_count().to_string());

    view! {
        <header>
            <a href="/" class="logo">{store_name}</a>
            <nav>
                <a href="/">"Home"</a>
                <a href="/products">"Products"</a>
                <a href="/cart">"Cart (" {cart_count} ")"</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let session = use_session();
    let store_name = session.with_untracked(|s| s.store_name().to_string());

    view! {
        <footer>
            <p>{store_name} " - AI diagnostics for every ride"</p>
        </footer>
    }
}

/// Confirmation of the last order, until the checkout form is edited.
#[component]
fn OrderNotice(labels: LabelSet) -> impl IntoView {
    let session = use_session();
    let message = move || {
        session.with(|s| s.checkout().last_ack().map(|ack| ack.message(labels)))
    };

    view! {
        {move || message().map(|message| view! {
            <div class="order-notice" role="status">
                {message.lines().map(|line| view! { <p>{line.to_string()}</p> }).collect::<Vec<_>>()}
            </div>
        })}
    }
}

// ============================================================================
// Landing Page
// ============================================================================

#[component]
fn LandingPage() -> impl IntoView {
    let overlay = RwSignal::new(Overlay::default());

    view! {
        <section class="hero" id="home">
            <div class="landing-bar">
                <div class="sections">
                    {NAV_SECTIONS.iter().map(|section| view! {
                        <a href=format!("#{}", section)>{capitalize(section)}</a>
                    }).collect::<Vec<_>>()}
                    <a href="/products">"Products"</a>
                </div>
                <button on:click=move |_| overlay.update(|o| o.open_login())>"Login"</button>
                <button on:click=move |_| overlay.update(|o| o.open_register())>"Register"</button>
                <button class="menu-toggle" on:click=move |_| overlay.update(|o| o.toggle_menu())>
                    {move || if overlay.get().is_menu_open() { "Close" } else { "Menu" }}
                </button>
            </div>
            {move || overlay.get().is_menu_open().then(|| view! { <MobileMenu overlay/> })}

            <h1 class="headline"><TypingHeadline/></h1>
            <p>"AI-enabled diagnostics that keep your motorcycle healthy."</p>
            <a href="/products" class="btn">"Shop Now"</a>
        </section>

        <section id="about">
            <h2>"About RhinoFuse"</h2>
            <p>"A compact chip that reads your bike's OBD-II port and predicts failures before they happen."</p>
        </section>
        <section id="features">
            <h2>"Features"</h2>
            <ul>
                <li>"Real-time engine health monitoring"</li>
                <li>"Predictive AI alerts"</li>
                <li>"Weather & road condition tracking"</li>
            </ul>
        </section>
        <section id="contact">
            <h2>"Contact"</h2>
            <p>"support@rhinofuse.in"</p>
        </section>

        {move || match overlay.get() {
            Overlay::Login => Some(view! { <AuthModal register=false overlay/> }),
            Overlay::Register => Some(view! { <AuthModal register=true overlay/> }),
            Overlay::None | Overlay::Menu => None,
        }}
    }
}

#[component]
fn MobileMenu(overlay: RwSignal<Overlay>) -> impl IntoView {
    view! {
        <div class="mobile-menu">
            {NAV_SECTIONS.iter().map(|section| view! {
                <a href=format!("#{}", section) on:click=move |_| overlay.update(|o| o.close())>
                    {capitalize(section)}
                </a>
            }).collect::<Vec<_>>()}
            <a href="/products" on:click=move |_| overlay.update(|o| o.close())>"Products"</a>
            <button on:click=move |_| overlay.update(|o| o.open_login())>"Login"</button>
            <button on:click=move |_| overlay.update(|o| o.open_register())>"Register"</button>
        </div>
    }
}

/// Login or registration form. Accounts are not wired to a backend.
#[component]
fn AuthModal(register: bool, overlay: RwSignal<Overlay>) -> impl IntoView {
    let title = if register { "Create Account" } else { "Welcome Back" };
    let submit = if register { "Register" } else { "Login" };

    view! {
        <div class="modal-backdrop" on:click=move |_| overlay.update(|o| o.close())>
            <form
                class="modal"
                on:click=|ev| ev.stop_propagation()
                on:submit=move |ev| {
                    ev.prevent_default();
                    overlay.update(|o| o.close());
                }
            >
                <button type="button" class="close" on:click=move |_| overlay.update(|o| o.close())>
                    "✕"
                </button>
                <h2>{title}</h2>
                {register.then(|| view! { <input type="text" name="name" placeholder="Full name"/> })}
                <input type="email" name="email" placeholder="Email"/>
                <input type="password" name="password" placeholder="Password"/>
                <button type="submit" class="btn">{submit}</button>
                {if register {
                    view! {
                        <p>"Already have an account? "
                            <a href="#" on:click=move |ev| { ev.prevent_default(); overlay.update(|o| o.open_login()); }>"Login"</a>
                        </p>
                    }.into_any()
                } else {
                    view! {
                        <p>"New here? "
                            <a href="#" on:click=move |ev| { ev.prevent_default(); overlay.update(|o| o.open_register()); }>"Register"</a>
                        </p>
                    }.into_any()
                }}
            </form>
        </div>
    }
}

#[component]
fn TypingHeadline() -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(HEADLINES));
    schedule_tick(typewriter, TYPE_DELAY_MS);

    view! {
        <span class="typing">{move || typewriter.with(|t| t.text().to_string())}</span>
    }
}

fn schedule_tick(typewriter: RwSignal<Typewriter>, delay_ms: u32) {
    set_timeout(
        move || {
            // Stops once the headline is unmounted and the signal disposed.
            if let Some(next) = typewriter.try_update(|t| t.tick()) {
                schedule_tick(typewriter, next);
            }
        },
        millis(delay_ms),
    );
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Product Page
// ============================================================================

#[component]
fn ProductsPage() -> impl IntoView {
    let session = use_session();
    let product = session.with_untracked(|s| s.catalog().featured.clone());
    let related = session.with_untracked(|s| s.catalog().related.clone());
    let state = RwSignal::new(session.with_untracked(|s| ProductPageState::new(&product, s)));

    let handle = window_event_listener(ev::keydown, move |ev| {
        if state.with_untracked(|p| p.gallery.is_open()) {
            let key = GalleryKey::from_key(&ev.key());
            state.update(|p| {
                p.gallery.handle_key(key);
            });
        }
    });
    on_cleanup(move || handle.remove());

    let add_to_cart = move |_| {
        session.update(|s| {
            state.update(|p| {
                let _ = p.add_to_cart(s);
            })
        });
        set_timeout(
            move || state.update(|p| p.settle_feedback()),
            millis(FEEDBACK_SETTLE_MS),
        );
    };
    let buy_now = move |_| {
        session.update(|s| {
            state.update(|p| {
                let _ = p.buy_now(s);
            })
        });
    };

    let image_product = product.clone();
    let modal_product = product.clone();
    let tab_product = product.clone();
    let rating = product
        .average_rating()
        .map(|avg| format!("{:.1} / 5 ({} reviews)", avg, product.reviews.len()));

    view! {
        <OrderNotice labels=LabelSet::CartPanel/>
        <div class="product-layout">
            <div class="gallery">
                <button class="main-image" on:click=move |_| state.update(|p| p.gallery.open(0))>
                    <img
                        src=move || {
                            let index = state.with(|p| p.gallery.current());
                            image_product.image(index).unwrap_or_default().to_string()
                        }
                        alt=product.name.clone()
                    />
                </button>
                <div class="thumbnails">
                    {product.images.iter().cloned().enumerate().map(|(index, src)| view! {
                        <button
                            class=move || if state.with(|p| p.gallery.current() == index) { "thumb active" } else { "thumb" }
                            on:click=move |_| state.update(|p| p.gallery.open(index))
                        >
                            <img src=src alt=format!("Product view {}", index + 1)/>
                        </button>
                    }).collect::<Vec<_>>()}
                </div>
            </div>

            <div class="details">
                {product.badge.clone().map(|badge| view! { <span class="badge">{badge}</span> })}
                <h1>{product.name.clone()}</h1>
                {rating.map(|rating| view! { <p class="rating">{rating}</p> })}
                <p class="price">{product.price.to_string()}</p>
                <p>{product.description.clone()}</p>

                <div class="stepper">
                    <button on:click=move |_| state.update(|p| p.stepper.decrement())>"-"</button>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || state.with(|p| p.stepper.value().to_string())
                        on:change=move |ev| {
                            let input = event_target_value(&ev);
                            // Rejected input re-renders the current value.
                            state.update(|p| {
                                let _ = p.stepper.set_input(&input);
                            });
                        }
                    />
                    <button on:click=move |_| state.update(|p| p.stepper.increment())>"+"</button>
                </div>

                <div class="actions">
                    <button
                        class=move || if state.with(|p| p.feedback() == AddToCartFeedback::Added) { "btn added" } else { "btn" }
                        on:click=add_to_cart
                    >
                        {move || match state.with(|p| p.feedback()) {
                            AddToCartFeedback::Added => "Added to Cart",
                            AddToCartFeedback::Idle => "Add to Cart",
                        }}
                    </button>
                    <button class="btn secondary" on:click=buy_now>"Buy Now"</button>
                    <button class="btn link" on:click=move |_| state.update(|p| p.open_panel())>"View Cart"</button>
                </div>

                <h3>"Key Features:"</h3>
                <ul class="features">
                    {product.features.iter().map(|f| view! { <li>{f.clone()}</li> }).collect::<Vec<_>>()}
                </ul>
            </div>
        </div>

        <div class="tabs">
            {ProductTab::ALL.iter().map(|&tab| view! {
                <button
                    class=move || if state.with(|p| p.tab == tab) { "tab active" } else { "tab" }
                    on:click=move |_| state.update(|p| p.select_tab(tab))
                >
                    {tab.label()}
                </button>
            }).collect::<Vec<_>>()}
        </div>
        {move || {
            let product = tab_product.clone();
            match state.with(|p| p.tab) {
                ProductTab::Overview => view! { <OverviewTab description=product.description/> }.into_any(),
                ProductTab::Specs => view! { <SpecsTab specs=product.specs/> }.into_any(),
                ProductTab::Reviews => view! { <ReviewsTab reviews=product.reviews/> }.into_any(),
                ProductTab::Support => view! { <SupportTab/> }.into_any(),
            }
        }}

        <h2>"You May Also Like"</h2>
        <div class="products">
            {related.into_iter().map(|p| view! { <RelatedCard product=p/> }).collect::<Vec<_>>()}
        </div>

        {move || state.with(|p| p.is_panel_open()).then(|| view! { <CartPanelView state/> })}
        {move || state.with(|p| p.gallery.is_open()).then(|| view! { <ImageModal product=modal_product.clone() state/> })}
    }
}

#[component]
fn OverviewTab(description: String) -> impl IntoView {
    view! {
        <div class="tab-panel">
            <h3>"Product Overview"</h3>
            <p>{description}</p>
            <h4>"How It Works"</h4>
            <ol>
                <li>"Plug the device into your motorcycle's OBD-II port"</li>
                <li>"Connect to the RhinoFuse mobile app via Bluetooth"</li>
                <li>"Get real-time diagnostics and predictive alerts"</li>
                <li>"Receive maintenance suggestions and service reminders"</li>
            </ol>
            <h4>"What's in the Box"</h4>
            <ul>
                <li>"RhinoFuse Ultimate Device"</li>
                <li>"OBD-II Connector Cable"</li>
                <li>"Mounting Kit"</li>
                <li>"Quick Start Guide"</li>
                <li>"1-Year Warranty Card"</li>
            </ul>
        </div>
    }
}

#[component]
fn SpecsTab(specs: Vec<ProductSpec>) -> impl IntoView {
    view! {
        <table class="tab-panel specs">
            {specs.into_iter().map(|spec| view! {
                <tr><th>{spec.name}</th><td>{spec.value}</td></tr>
            }).collect::<Vec<_>>()}
        </table>
    }
}

#[component]
fn ReviewsTab(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <div class="tab-panel reviews">
            {reviews.into_iter().map(|review| view! {
                <div class="review">
                    <span class="stars">{review.stars()}</span>
                    <strong>{review.author.clone()}</strong>
                    <span class="date">{review.date_display()}</span>
                    <p>{review.comment.clone()}</p>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn SupportTab() -> impl IntoView {
    view! {
        <div class="tab-panel">
            <h3>"Support & Warranty"</h3>
            <ul>
                <li>"1-year limited warranty"</li>
                <li>"Free replacement for manufacturing defects"</li>
                <li>"24/7 customer support"</li>
            </ul>
        </div>
    }
}

#[component]
fn RelatedCard(product: RelatedProduct) -> impl IntoView {
    view! {
        <div class="product-card">
            <img src=product.image alt=product.name.clone()/>
            <div class="product-info">
                <h4>{product.name}</h4>
                <p class="price">{product.price.to_string()}</p>
                <a href="/products" class="btn">"View Product"</a>
            </div>
        </div>
    }
}

#[component]
fn ImageModal(product: Product, state: RwSignal<ProductPageState>) -> impl IntoView {
    let current = move || {
        let index = state.with(|p| p.gallery.current());
        product.image(index).unwrap_or_default().to_string()
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| state.update(|p| p.gallery.close())>
            <button class="nav prev" on:click=move |ev| {
                ev.stop_propagation();
                state.update(|p| p.gallery.previous());
            }>"‹"</button>
            <img class="enlarged" src=current on:click=|ev| ev.stop_propagation()/>
            <button class="nav next" on:click=move |ev| {
                ev.stop_propagation();
                state.update(|p| p.gallery.next());
            }>"›"</button>
        </div>
    }
}

#[component]
fn CartPanelView(state: RwSignal<ProductPageState>) -> impl IntoView {
    let session = use_session();
    let place_order = move |_| {
        session.update(|s| {
            state.update(|p| {
                p.place_order(s);
            })
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| state.update(|p| p.close_panel())>
            <div class="cart-panel" on:click=|ev| ev.stop_propagation()>
                <div class="panel-header">
                    <h2>"Your Cart"</h2>
                    <button class="close" on:click=move |_| state.update(|p| p.close_panel())>"✕"</button>
                </div>
                {move || if session.with(|s| s.cart().is_empty()) {
                    view! { <p class="empty">"Your cart is empty"</p> }.into_any()
                } else {
                    view! {
                        <div class="lines">
                            {session.with(|s| s.cart().items().to_vec()).into_iter().map(|item| view! {
                                <div class="line">
                                    <div>
                                        <h3>{item.name.clone()}</h3>
                                        <p>"Quantity: " {item.quantity().to_string()}</p>
                                    </div>
                                    <p>{item.subtotal().to_string()}</p>
                                </div>
                            }).collect::<Vec<_>>()}
                        </div>
                        <div class="summary">
                            <span>"Total"</span>
                            <strong>{session.with(|s| s.cart().total().to_string())}</strong>
                        </div>
                        <CheckoutFields labels=LabelSet::CartPanel/>
                        <button class="btn" on:click=place_order>"Place Order"</button>
                    }.into_any()
                }}
            </div>
        </div>
    }
}

/// Address and payment method inputs shared by the cart panel and the
/// checkout page.
#[component]
fn CheckoutFields(labels: LabelSet) -> impl IntoView {
    let session = use_session();

    view! {
        <label for="address">"Delivery Address"</label>
        <textarea
            id="address"
            rows="3"
            placeholder="Enter your full address"
            prop:value=move || session.with(|s| s.checkout().address().to_string())
            on:input=move |ev| {
                let address = event_target_value(&ev);
                session.update(|s| s.set_address(address));
            }
        ></textarea>

        <fieldset class="payment">
            <legend>"Payment Method"</legend>
            {PaymentMethod::ALL.iter().map(|&method| view! {
                <label>
                    <input
                        type="radio"
                        name="payment"
                        value=method.code()
                        prop:checked=move || session.with(|s| s.checkout().payment_method() == method)
                        on:change=move |_| session.update(|s| s.set_payment_method(method))
                    />
                    " " {method.label(labels)}
                </label>
            }).collect::<Vec<_>>()}
        </fieldset>
    }
}

// ============================================================================
// Cart and Checkout Pages
// ============================================================================

#[component]
fn CartPage() -> impl IntoView {
    let session = use_session();

    view! {
        <h1>"Your Cart"</h1>
        {move || if session.with(|s| s.cart().is_empty()) {
            view! {
                <p>"Your cart is empty. " <a href="/products">"Shop now"</a></p>
            }.into_any()
        } else {
            let (items, pricing) = session.with(|s| (s.cart().items().to_vec(), s.cart().pricing()));
            let lines = items.into_iter().map(|item| {
                let subtotal = pricing
                    .line(&item.id)
                    .map(|line| line.subtotal)
                    .unwrap_or_else(|| item.subtotal());
                view! { <CartLine item subtotal/> }
            }).collect::<Vec<_>>();

            view! {
                <div class="cart">
                    {lines}
                    <div class="summary">
                        <p>{pricing.item_count.to_string()} " item(s)"</p>
                        <p>"Total: " {pricing.grand_total.to_string()}</p>
                        <a href="/checkout" class="btn">"Proceed to Checkout"</a>
                    </div>
                </div>
            }.into_any()
        }}
    }
}

#[component]
fn CartLine(item: LineItem, subtotal: Money) -> impl IntoView {
    let session = use_session();
    let update_id = item.id.clone();
    let remove_id = item.id.clone();

    view! {
        <div class="line">
            <div>
                <h2>{item.name.clone()}</h2>
                <p>{item.unit_price.to_string()} " each"</p>
            </div>
            <div class="line-actions">
                <input
                    type="number"
                    min="1"
                    prop:value=item.quantity().to_string()
                    on:change=move |ev| {
                        let input = event_target_value(&ev);
                        // Rejected input re-renders the stored quantity.
                        session.update(|s| {
                            let _ = s.update_quantity_input(&update_id, &input);
                        });
                    }
                />
                <span class="subtotal">{subtotal.to_string()}</span>
                <button class="danger" on:click=move |_| session.update(|s| {
                    s.remove_item(&remove_id);
                })>
                    "Remove"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CheckoutPage() -> impl IntoView {
    let session = use_session();
    let place_order = move |_| {
        session.update(|s| {
            s.place_order();
        });
    };

    view! {
        <h1>"Checkout"</h1>
        <OrderNotice labels=LabelSet::Checkout/>
        <p class="summary">
            {move || session.with(|s| format!(
                "{} item(s), total {}",
                s.cart().item_count(),
                s.cart().total()
            ))}
        </p>
        <CheckoutFields labels=LabelSet::Checkout/>
        <button class="btn" on:click=place_order>"Place Order"</button>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
