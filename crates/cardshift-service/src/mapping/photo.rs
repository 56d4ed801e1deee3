//! `PHOTO`, the contact image.

use cardshift_core::contact::Contact;
use cardshift_rfc::rfc::vcard::VCard;
use cardshift_rfc::rfc::vcard::core::names;

use super::{ExportContext, ImportContext, VCardMapping};
use crate::codec::photo::decode_photo;

pub struct PhotoMapping;

impl VCardMapping for PhotoMapping {
    fn name(&self) -> &'static str {
        "photo"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::PHOTO]
    }

    /// A photo that cannot be loaded clears the image; the warning says why.
    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        let Some(prop) = card.get_property(names::PHOTO) else {
            return;
        };

        match decode_photo(prop, &ctx.images, &mut ctx.warnings) {
            Some(image) => {
                contact.image = Some(image.data);
                contact.image_content_type = image.content_type;
            }
            None => {
                contact.image = None;
                contact.image_content_type = None;
            }
        }
    }

    /// The property is rebuilt from scratch since its encoding parameters
    /// depend on the version. Only the group carries over.
    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        let Some(data) = contact.image.as_deref().filter(|d| !d.is_empty()) else {
            card.remove_properties(names::PHOTO);
            return;
        };

        let mut new = ctx
            .policy
            .photo_property(data, contact.image_content_type.as_deref());

        match card.properties.iter().position(|p| p.is(names::PHOTO)) {
            Some(index) => {
                new.group = card.properties[index].group.take();
                card.properties[index] = new;
                let mut seen = 0;
                card.properties.retain(|p| {
                    if !p.is(names::PHOTO) {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => card.add_property(new),
        }
    }
}
