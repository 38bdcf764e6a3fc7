//! Display data of an "edit label" edit

use serde::Deserialize;

use super::{Area, Change, Field, Label, LabelType, PartialDate};

/// Resolved display data of a label edit
///
/// Every field except `label` is optional: a field missing from the edit
/// produces no row. Fields present with identical sides are kept as-is.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LabelEdit {
    /// The edited label
    pub label: Label,
    #[serde(default)]
    pub name: Field<String>,
    #[serde(default)]
    pub sort_name: Field<String>,
    #[serde(default)]
    pub comment: Field<Option<String>>,
    #[serde(default, rename = "type")]
    pub label_type: Field<Option<LabelType>>,
    #[serde(default)]
    pub label_code: Field<Option<u32>>,
    #[serde(default)]
    pub begin_date: Field<PartialDate>,
    #[serde(default)]
    pub end_date: Field<PartialDate>,
    #[serde(default)]
    pub ended: Field<bool>,
    #[serde(default)]
    pub area: Field<Option<Area>>,
    #[serde(default)]
    pub ipi_codes: Field<Option<Vec<String>>>,
    #[serde(default)]
    pub isni_codes: Field<Option<Vec<String>>>,
}

/// Editable label fields in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelField {
    Name,
    SortName,
    Comment,
    Type,
    LabelCode,
    BeginDate,
    EndDate,
    Ended,
    Area,
    IpiCodes,
    IsniCodes,
}

impl LabelField {
    /// All fields, in the order rows are rendered
    pub const ALL: [LabelField; 11] = [
        Self::Name,
        Self::SortName,
        Self::Comment,
        Self::Type,
        Self::LabelCode,
        Self::BeginDate,
        Self::EndDate,
        Self::Ended,
        Self::Area,
        Self::IpiCodes,
        Self::IsniCodes,
    ];

    /// Untranslated row label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::SortName => "Sort name",
            Self::Comment => "Disambiguation",
            Self::Type => "Type",
            Self::LabelCode => "Label code",
            Self::BeginDate => "Begin date",
            Self::EndDate => "End date",
            Self::Ended => "Ended",
            Self::Area => "Area",
            Self::IpiCodes => "IPI codes",
            Self::IsniCodes => "ISNI codes",
        }
    }
}

impl LabelEdit {
    /// Create an edit of `label` with no changed fields
    pub fn new(label: Label) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    /// Check whether a field is part of the edit
    pub fn has_field(&self, field: LabelField) -> bool {
        match field {
            LabelField::Name => self.name.is_some(),
            LabelField::SortName => self.sort_name.is_some(),
            LabelField::Comment => self.comment.is_some(),
            LabelField::Type => self.label_type.is_some(),
            LabelField::LabelCode => self.label_code.is_some(),
            LabelField::BeginDate => self.begin_date.is_some(),
            LabelField::EndDate => self.end_date.is_some(),
            LabelField::Ended => self.ended.is_some(),
            LabelField::Area => self.area.is_some(),
            LabelField::IpiCodes => self.ipi_codes.is_some(),
            LabelField::IsniCodes => self.isni_codes.is_some(),
        }
    }

    /// Fields present in this edit, in display order
    pub fn present_fields(&self) -> impl Iterator<Item = LabelField> + '_ {
        LabelField::ALL
            .into_iter()
            .filter(|field| self.has_field(*field))
    }

    /// Builder helper: set the name change
    pub fn with_name(mut self, old: &str, new: &str) -> Self {
        self.name = Some(Change::new(old.to_string(), new.to_string()));
        self
    }

    /// Builder helper: set the ended flag change
    pub fn with_ended(mut self, old: bool, new: bool) -> Self {
        self.ended = Some(Change::new(old, new));
        self
    }
}
