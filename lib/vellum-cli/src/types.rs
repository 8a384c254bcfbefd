use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Implementations a hook can be backed by on the platform side.
#[derive(Clone, Copy, Debug, Display, EnumString, VariantNames, PartialEq, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HookType {
    Function,
    Webhook,
}

impl HookType {
    #[must_use]
    pub const fn variants() -> &'static [&'static str] {
        <Self as strum::VariantNames>::VARIANTS
    }
}

impl Default for HookType {
    fn default() -> Self {
        Self::Webhook
    }
}

/// Permission group a user account belongs to.
#[derive(Clone, Copy, Debug, Display, EnumString, VariantNames, PartialEq, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserGroup {
    Annotator,
    Admin,
    Manager,
    Viewer,
}

impl UserGroup {
    #[must_use]
    pub const fn variants() -> &'static [&'static str] {
        <Self as strum::VariantNames>::VARIANTS
    }
}

impl Default for UserGroup {
    fn default() -> Self {
        Self::Annotator
    }
}

/// UI locale of a user account.
#[derive(Clone, Copy, Debug, Display, EnumString, VariantNames, PartialEq, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Cs,
}

impl Locale {
    #[must_use]
    pub const fn variants() -> &'static [&'static str] {
        <Self as strum::VariantNames>::VARIANTS
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}
