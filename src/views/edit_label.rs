//! Details of an "edit label" edit

use crate::components::{DetailTable, descriptive_link, entity_link};
use crate::diff::{Primitive, SPLIT_DATE, SPLIT_LIST, SPLIT_WORDS, diff_row, full_change_row};
use crate::format::{comma_only_list_text, format_date, yes_no};
use crate::i18n::{Translator, add_colon_text};
use crate::markup::{Element, Node};
use crate::model::{Change, LabelEdit, LabelField};

impl LabelField {
    /// Primitive used to render this field's row
    pub fn primitive(&self) -> Primitive {
        match self {
            Self::Name | Self::Comment => Primitive::Diff {
                split: Some(SPLIT_WORDS),
            },
            Self::SortName | Self::LabelCode => Primitive::Diff { split: None },
            Self::BeginDate | Self::EndDate => Primitive::Diff {
                split: Some(SPLIT_DATE),
            },
            Self::IpiCodes | Self::IsniCodes => Primitive::Diff {
                split: Some(SPLIT_LIST),
            },
            Self::Type | Self::Ended | Self::Area => Primitive::FullChange,
        }
    }
}

/// Table of the label being edited followed by one row per field in the edit
pub fn edit_label(edit: &LabelEdit, i18n: &dyn Translator) -> Element {
    let mut table = DetailTable::new(
        "edit-label",
        &add_colon_text(i18n, &i18n.l("Label")),
        entity_link(&edit.label),
    );

    for field in edit.present_fields() {
        if let Some(row) = field_row(edit, field, i18n) {
            table.push(row);
        }
    }

    tracing::trace!(rows = table.row_count(), "rendered label edit");
    table.build()
}

fn field_row(edit: &LabelEdit, field: LabelField, i18n: &dyn Translator) -> Option<Element> {
    let label = add_colon_text(i18n, &i18n.l(field.label()));
    match field.primitive() {
        Primitive::Diff { split } => {
            let change = text_change(edit, field, i18n)?;
            Some(diff_row(&label, &change.old, &change.new, split))
        }
        Primitive::FullChange => {
            let change = content_change(edit, field, i18n)?;
            Some(full_change_row(&label, change.old, change.new))
        }
    }
}

/// Text form of a diffed field; missing values become empty strings
fn text_change(edit: &LabelEdit, field: LabelField, i18n: &dyn Translator) -> Option<Change<String>> {
    let codes = |codes: &Option<Vec<String>>| {
        codes
            .as_deref()
            .map(|codes| comma_only_list_text(codes, i18n))
            .unwrap_or_default()
    };

    match field {
        LabelField::Name => edit.name.clone(),
        LabelField::SortName => edit.sort_name.clone(),
        LabelField::Comment => edit
            .comment
            .as_ref()
            .map(|c| c.map(|v| v.clone().unwrap_or_default())),
        LabelField::LabelCode => edit
            .label_code
            .as_ref()
            .map(|c| c.map(|v| v.map(|code| code.to_string()).unwrap_or_default())),
        LabelField::BeginDate => edit.begin_date.as_ref().map(|c| c.map(format_date)),
        LabelField::EndDate => edit.end_date.as_ref().map(|c| c.map(format_date)),
        LabelField::IpiCodes => edit.ipi_codes.as_ref().map(|c| c.map(codes)),
        LabelField::IsniCodes => edit.isni_codes.as_ref().map(|c| c.map(codes)),
        LabelField::Type | LabelField::Ended | LabelField::Area => None,
    }
}

/// Rendered content of a whole-unit field; `None` sides had no value
fn content_change(
    edit: &LabelEdit,
    field: LabelField,
    i18n: &dyn Translator,
) -> Option<Change<Option<Node>>> {
    match field {
        LabelField::Type => edit.label_type.as_ref().map(|c| {
            c.map(|t| {
                t.as_ref()
                    .map(|t| Node::text(i18n.lp_attributes(&t.name, "label_type")))
            })
        }),
        LabelField::Ended => edit
            .ended
            .as_ref()
            .map(|c| c.map(|ended| Some(Node::text(yes_no(*ended, i18n))))),
        LabelField::Area => edit
            .area
            .as_ref()
            .map(|c| c.map(|area| area.as_ref().map(descriptive_link))),
        _ => None,
    }
}
