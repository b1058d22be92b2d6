//! Product Card Component
//!
//! Shop grid card with rating, pricing and the cart/wishlist actions.

use leptos::prelude::*;

use crate::components::{AddToCartButton, RatingStars, WishlistButton};
use crate::models::Product;

/// Percentage saved against the old price, when actually reduced.
pub fn discount_percent(price: f64, old_price: Option<f64>) -> Option<u32> {
    let old = old_price?;
    if old > price {
        Some((((old - price) / old) * 100.0) as u32)
    } else {
        None
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let product_id = product.id.to_string();

    view! {
        <div class="product-card" data-aos="fade-up">
            <div class="product-media">
                <img src=product.image.clone() alt=product.name.clone() loading="lazy" />
                {(!product.badge.is_empty()).then(|| view! {
                    <span class="product-badge">{product.badge.clone()}</span>
                })}
                {discount_percent(product.price, product.old_price).map(|percent| view! {
                    <span class="product-discount">{format!("-{percent}%")}</span>
                })}
                <WishlistButton product_id=product_id.clone() initial_active=product.wishlisted />
            </div>
            <div class="product-info">
                <a class="product-name" href=format!("/product/{}/", product.slug)>
                    {product.name.clone()}
                </a>
                <div class="product-rating">
                    <RatingStars rating=product.rating />
                    <span class="reviews-count">{format!("({})", product.reviews_count)}</span>
                </div>
                <div class="product-price">
                    <span class="price">{format!("${:.2}", product.price)}</span>
                    {product.old_price.map(|old| view! {
                        <span class="old-price">{format!("${old:.2}")}</span>
                    })}
                </div>
                <AddToCartButton product_id=product_id />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::discount_percent;

    #[test]
    fn test_discount_from_old_price() {
        assert_eq!(discount_percent(75.0, Some(100.0)), Some(25));
    }

    #[test]
    fn test_no_discount_when_not_reduced() {
        assert_eq!(discount_percent(50.0, None), None);
        assert_eq!(discount_percent(50.0, Some(40.0)), None);
        assert_eq!(discount_percent(50.0, Some(50.0)), None);
    }
}
