//! The fixed row of promotional tiles under the login form.

use crate::locale::Locale;
use crate::strings::StringKey;

/// Which bundled image a tile shows. The `ui` crate maps these to assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum TileIcon {
    OurProducts,
    ExchangeRate,
    SecurityTips,
    NearestBranchOrAtm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoTile {
    pub icon: TileIcon,
    pub label: StringKey,
}

impl PromoTile {
    pub fn label_text(&self, locale: Locale) -> &'static str {
        self.label.text(locale)
    }
}

pub const PROMO_TILES: [PromoTile; 4] = [
    PromoTile {
        icon: TileIcon::OurProducts,
        label: StringKey::OurProducts,
    },
    PromoTile {
        icon: TileIcon::ExchangeRate,
        label: StringKey::ExchangeRate,
    },
    PromoTile {
        icon: TileIcon::SecurityTips,
        label: StringKey::SecurityTips,
    },
    PromoTile {
        icon: TileIcon::NearestBranchOrAtm,
        label: StringKey::NearestBranch,
    },
];
