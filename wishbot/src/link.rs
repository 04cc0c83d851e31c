//! Wish-page link construction.

use storage::Language;

pub const EN_SITE: &str = "https://birthday-wish-en.netlify.app/sc.html?nama=";
pub const BN_SITE: &str = "https://birthday-wish-bn.netlify.app/sc.html?nama=";

/// Builds `<base><name>` with spaces in the name written as `%20`. No other character is escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    en_base: String,
    bn_base: String,
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new(EN_SITE, BN_SITE)
    }
}

impl LinkBuilder {
    pub fn new(en_base: impl Into<String>, bn_base: impl Into<String>) -> Self {
        Self {
            en_base: en_base.into(),
            bn_base: bn_base.into(),
        }
    }

    pub fn base(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en_base,
            Language::Bn => &self.bn_base,
        }
    }

    pub fn build(&self, language: Language, name: &str) -> String {
        format!("{}{}", self.base(language), name.replace(' ', "%20"))
    }
}
