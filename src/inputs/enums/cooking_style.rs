use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CookingStyle {
    #[default]
    #[serde(rename = "Thai Street Food in Yaowarat at night")]
    YaowaratStreetFood,
    #[serde(rename = "Royal Thai Cuisine served in golden plate")]
    RoyalThai,
    #[serde(rename = "Spicy Isaan style with sticky rice")]
    SpicyIsaan,
    #[serde(rename = "Floating market food on a boat")]
    FloatingMarket,
    #[serde(rename = "Southern Thai food, very spicy and colorful")]
    SouthernThai,
    #[serde(rename = "Modern Thai cuisine, fine dining presentation")]
    ModernThai,
}

impl CookingStyle {
    pub const ALL: [CookingStyle; 6] = [
        Self::YaowaratStreetFood,
        Self::RoyalThai,
        Self::SpicyIsaan,
        Self::FloatingMarket,
        Self::SouthernThai,
        Self::ModernThai,
    ];

    /// Prompt text sent to the generation service.
    pub fn value(&self) -> &'static str {
        match *self {
            Self::YaowaratStreetFood => "Thai Street Food in Yaowarat at night",
            Self::RoyalThai => "Royal Thai Cuisine served in golden plate",
            Self::SpicyIsaan => "Spicy Isaan style with sticky rice",
            Self::FloatingMarket => "Floating market food on a boat",
            Self::SouthernThai => "Southern Thai food, very spicy and colorful",
            Self::ModernThai => "Modern Thai cuisine, fine dining presentation",
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Self::YaowaratStreetFood => "อาหารสตรีทฟู้ดเยาวราช",
            Self::RoyalThai => "อาหารชาววังเครื่องทอง",
            Self::SpicyIsaan => "อาหารอีสานรสแซ่บ",
            Self::FloatingMarket => "อาหารในตลาดน้ำ",
            Self::SouthernThai => "อาหารใต้รสจัดจ้าน",
            Self::ModernThai => "อาหารไทยสไตล์โมเดิร์น",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.value() == value)
    }
}
