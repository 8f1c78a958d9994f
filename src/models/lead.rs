use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The four values a visitor types or picks on the introduction form.
///
/// Select values arrive as option codes (`"implants"`, `"researching"`), but
/// nothing stops a client from posting anything, so they stay plain strings
/// here and are only interpreted when the relay payload is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    pub dental_work_type: String,
    pub timeframe: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Phone,
    DentalWorkType,
    Timeframe,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Phone,
        Field::DentalWorkType,
        Field::Timeframe,
    ];

    pub fn required_message(&self) -> &'static str {
        match self {
            Field::Name => "Full name is required",
            Field::Phone => "Phone number is required",
            Field::DentalWorkType => "Please select a dental work type",
            Field::Timeframe => "Please select a timeframe",
        }
    }
}

/// Per-field messages from a failed validation. Several fields can fail at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

impl LeadForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::DentalWorkType => &self.dental_work_type,
            Field::Timeframe => &self.timeframe,
        }
    }

    /// Checks that every field is non-empty. Values are not trimmed or
    /// otherwise altered, so a lone space counts as an answer.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors: BTreeMap<Field, &'static str> = Field::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .map(|field| (field, field.required_message()))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    pub fn clear(&mut self) {
        *self = LeadForm::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DentalWorkType {
    CleaningCheckup,
    Fillings,
    CrownsBridges,
    Implants,
    VeneersCosmetic,
    RootCanal,
    Extraction,
    Dentures,
    OtherMultiple,
}

impl DentalWorkType {
    pub const ALL: [DentalWorkType; 9] = [
        DentalWorkType::CleaningCheckup,
        DentalWorkType::Fillings,
        DentalWorkType::CrownsBridges,
        DentalWorkType::Implants,
        DentalWorkType::VeneersCosmetic,
        DentalWorkType::RootCanal,
        DentalWorkType::Extraction,
        DentalWorkType::Dentures,
        DentalWorkType::OtherMultiple,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DentalWorkType::CleaningCheckup => "cleaning-checkup",
            DentalWorkType::Fillings => "fillings",
            DentalWorkType::CrownsBridges => "crowns-bridges",
            DentalWorkType::Implants => "implants",
            DentalWorkType::VeneersCosmetic => "veneers-cosmetic",
            DentalWorkType::RootCanal => "root-canal",
            DentalWorkType::Extraction => "extraction",
            DentalWorkType::Dentures => "dentures",
            DentalWorkType::OtherMultiple => "other-multiple",
        }
    }

    /// The exact option text the collector's form expects.
    pub fn label(&self) -> &'static str {
        match self {
            DentalWorkType::CleaningCheckup => "Cleaning / Checkup",
            DentalWorkType::Fillings => "Fillings",
            DentalWorkType::CrownsBridges => "Crowns / Bridges",
            DentalWorkType::Implants => "Dental Implants",
            DentalWorkType::VeneersCosmetic => "Veneers / Cosmetics",
            DentalWorkType::RootCanal => "Root Canal",
            DentalWorkType::Extraction => "Extraction",
            DentalWorkType::Dentures => "Dentures",
            DentalWorkType::OtherMultiple => "Other / Multiple Procedures",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    WithinOneMonth,
    OneToThreeMonths,
    ThreeToSixMonths,
    Researching,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::WithinOneMonth,
        Timeframe::OneToThreeMonths,
        Timeframe::ThreeToSixMonths,
        Timeframe::Researching,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Timeframe::WithinOneMonth => "within-1-month",
            Timeframe::OneToThreeMonths => "1-3-months",
            Timeframe::ThreeToSixMonths => "3-6-months",
            Timeframe::Researching => "researching",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::WithinOneMonth => "Within 1 month",
            Timeframe::OneToThreeMonths => "1-3 months",
            Timeframe::ThreeToSixMonths => "3-6 months",
            Timeframe::Researching => "Just researching options",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}
