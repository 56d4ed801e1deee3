//! `X-OX-COLOR-LABEL`, a small integer from 0 to 10.

use cardshift_core::constants::MAX_COLOR_LABEL;
use cardshift_core::contact::Contact;
use cardshift_rfc::rfc::vcard::{VCard, VCardProperty, VCardValue};

use super::{ExportContext, ImportContext, VCardMapping, write_single};
use crate::codec::text::text_value;
use crate::warning::{Warning, WarningCode};

pub const X_OX_COLOR_LABEL: &str = "X-OX-COLOR-LABEL";

pub struct ColorLabelMapping;

impl VCardMapping for ColorLabelMapping {
    fn name(&self) -> &'static str {
        "color_label"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[X_OX_COLOR_LABEL]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        let Some(prop) = card.get_property(X_OX_COLOR_LABEL) else {
            return;
        };
        let Some(raw) = text_value(prop, ctx.policy, &mut ctx.warnings) else {
            contact.color_label = None;
            return;
        };

        match raw.trim().parse::<u8>() {
            Ok(label) if label <= MAX_COLOR_LABEL => contact.color_label = Some(label),
            _ => ctx.warnings.push(
                Warning::new(
                    WarningCode::InvalidColorLabel,
                    format!("color label {raw:?} is not a number from 0 to {MAX_COLOR_LABEL}"),
                )
                .at(prop),
            ),
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, _ctx: &mut ExportContext) {
        let new = contact
            .color_label
            .map(|label| VCardProperty::new(X_OX_COLOR_LABEL, VCardValue::Unknown(label.to_string())));
        write_single(card, X_OX_COLOR_LABEL, new);
    }
}
