use dioxus::prelude::*;
use model::catalog::TileIcon;

const OUR_PRODUCTS: Asset = asset!("/assets/icons/our_products.svg");
const EXCHANGE_RATE: Asset = asset!("/assets/icons/exchange_rate.svg");
const SECURITY_TIPS: Asset = asset!("/assets/icons/security_tips.svg");
const NEAREST_BRANCH_OR_ATM: Asset = asset!("/assets/icons/nearest_branch_or_atm.svg");

fn icon_asset(icon: TileIcon) -> Asset {
    match icon {
        TileIcon::OurProducts => OUR_PRODUCTS,
        TileIcon::ExchangeRate => EXCHANGE_RATE,
        TileIcon::SecurityTips => SECURITY_TIPS,
        TileIcon::NearestBranchOrAtm => NEAREST_BRANCH_OR_ATM,
    }
}

/// A fixed-width icon-over-label column. Not interactive.
#[component]
pub fn PromoTile(icon: TileIcon, label: String) -> Element {
    rsx! {
        div {
            class: "promo-tile",
            img {
                src: icon_asset(icon),
                alt: "{label}",
                width: "70",
                height: "70",
            }
            span { "{label}" }
        }
    }
}
