use serde::Serialize;

/// Which shape of the generation service the shell talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// `generate-image`, then `generate-recipe` on demand.
    Split,
    /// One `generate-creation` call returning both artifacts.
    Combined,
}

impl GenerationMode {
    pub fn value(&self) -> &str {
        match *self {
            Self::Split => "split",
            Self::Combined => "combined",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "split" => Some(Self::Split),
            "combined" => Some(Self::Combined),
            _ => None,
        }
    }

    pub fn requires_quantity(&self) -> bool {
        *self == Self::Combined
    }

    pub fn validation_notice(&self) -> &'static str {
        match *self {
            Self::Split => "กรุณากรอกข้อมูลวัตถุดิบ",
            Self::Combined => "กรุณากรอกข้อมูลวัตถุดิบและจำนวนให้ครบถ้วน",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(GenerationMode::from_value(" Combined "), Some(GenerationMode::Combined));
        assert_eq!(GenerationMode::from_value("split"), Some(GenerationMode::Split));
        assert_eq!(GenerationMode::from_value("both"), None);
    }
}
