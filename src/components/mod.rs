//! UI Components
//!
//! Reusable Leptos components for the storefront chrome and product pages.

mod add_to_cart_button;
mod cart_badge;
mod cart_panel;
mod checkout_form;
mod loader;
mod navbar;
mod product_card;
mod rating_stars;
mod search_modal;
mod theme_toggle;
mod toast_host;
mod wishlist_button;

pub use add_to_cart_button::AddToCartButton;
pub use cart_badge::CartBadge;
pub use cart_panel::CartPanel;
pub use checkout_form::CheckoutForm;
pub use loader::Loader;
pub use navbar::Navbar;
pub use product_card::ProductCard;
pub use rating_stars::RatingStars;
pub use search_modal::SearchModal;
pub use theme_toggle::ThemeToggle;
pub use toast_host::ToastHost;
pub use wishlist_button::WishlistButton;
