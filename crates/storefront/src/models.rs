use std::fmt;

use serde::{Deserialize, Serialize};

/// South African province a customer lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Province {
    #[serde(rename = "Gauteng")]
    Gauteng,
    #[serde(rename = "Western Cape")]
    WesternCape,
    #[serde(rename = "KwaZulu-Natal")]
    KwaZuluNatal,
    #[serde(rename = "Eastern Cape")]
    EasternCape,
    #[serde(rename = "Free State")]
    FreeState,
    #[serde(rename = "Limpopo")]
    Limpopo,
    #[serde(rename = "Mpumalanga")]
    Mpumalanga,
    #[serde(rename = "Northern Cape")]
    NorthernCape,
    #[serde(rename = "North West")]
    NorthWest,
}

impl Province {
    pub const ALL: [Province; 9] = [
        Province::Gauteng,
        Province::WesternCape,
        Province::KwaZuluNatal,
        Province::EasternCape,
        Province::FreeState,
        Province::Limpopo,
        Province::Mpumalanga,
        Province::NorthernCape,
        Province::NorthWest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Province::Gauteng => "Gauteng",
            Province::WesternCape => "Western Cape",
            Province::KwaZuluNatal => "KwaZulu-Natal",
            Province::EasternCape => "Eastern Cape",
            Province::FreeState => "Free State",
            Province::Limpopo => "Limpopo",
            Province::Mpumalanga => "Mpumalanga",
            Province::NorthernCape => "Northern Cape",
            Province::NorthWest => "North West",
        }
    }
}

/// Marketing channel, used both for customer acquisition and campaign placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Meta,
    Google,
    Influencer,
    Newsletter,
    Referral,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Meta,
        Channel::Google,
        Channel::Influencer,
        Channel::Newsletter,
        Channel::Referral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Meta => "Meta",
            Channel::Google => "Google",
            Channel::Influencer => "Influencer",
            Channel::Newsletter => "Newsletter",
            Channel::Referral => "Referral",
        }
    }
}

/// Product line in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Supplements,
    Skincare,
    #[serde(rename = "Fitness Gear")]
    FitnessGear,
    Apparel,
    Haircare,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Supplements,
        Category::Skincare,
        Category::FitnessGear,
        Category::Apparel,
        Category::Haircare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Supplements => "Supplements",
            Category::Skincare => "Skincare",
            Category::FitnessGear => "Fitness Gear",
            Category::Apparel => "Apparel",
            Category::Haircare => "Haircare",
        }
    }
}

/// Reason a customer gave when sending items back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnReason {
    #[serde(rename = "Damaged item")]
    DamagedItem,
    #[serde(rename = "Incorrect item")]
    IncorrectItem,
    #[serde(rename = "Changed mind")]
    ChangedMind,
    #[serde(rename = "Late delivery")]
    LateDelivery,
    Other,
}

impl ReturnReason {
    pub const ALL: [ReturnReason; 5] = [
        ReturnReason::DamagedItem,
        ReturnReason::IncorrectItem,
        ReturnReason::ChangedMind,
        ReturnReason::LateDelivery,
        ReturnReason::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnReason::DamagedItem => "Damaged item",
            ReturnReason::IncorrectItem => "Incorrect item",
            ReturnReason::ChangedMind => "Changed mind",
            ReturnReason::LateDelivery => "Late delivery",
            ReturnReason::Other => "Other",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for ReturnReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
