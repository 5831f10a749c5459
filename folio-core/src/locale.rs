//! Display-language message tables
//!
//! The contact form, the about-page disclosure button and the clock share one
//! implementation each; only these strings differ between languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Tr,
}

/// Strings for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTable {
    pub name_required: &'static str,
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub message_required: &'static str,
    pub contact_sent: &'static str,
    pub show_more: &'static str,
    pub show_less: &'static str,
}

const EN: MessageTable = MessageTable {
    name_required: "Please enter your name.",
    email_required: "Please enter your email.",
    email_invalid: "Please enter a valid email.",
    message_required: "Please enter your message.",
    contact_sent: "Your message was sent successfully.",
    show_more: "Show More",
    show_less: "Show Less",
};

const TR: MessageTable = MessageTable {
    name_required: "Lütfen isminizi giriniz.",
    email_required: "Lütfen emailinizi giriniz.",
    email_invalid: "Lütfen geçerli email giriniz.",
    message_required: "Lütfen mesajınızı giriniz.",
    contact_sent: "Mesajınız başarıyla gönderildi.",
    show_more: "Daha Fazla Gör",
    show_less: "Daha Az Gör",
};

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Tr];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }

    pub fn messages(self) -> &'static MessageTable {
        match self {
            Locale::En => &EN,
            Locale::Tr => &TR,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = FolioError;

    /// Accepts `en`, `tr` and region-tagged forms like `tr_TR.UTF-8` or `en-US`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .trim()
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Ok(Locale::En),
            "tr" => Ok(Locale::Tr),
            _ => Err(FolioError::unknown_locale(s.trim())),
        }
    }
}
