//! Message payload validation.
//!
//! Size and shape limits for outbound messages. Codes start at 10 so they
//! never collide with the permission-check codes of the same operation.

use wd_common::types::{Component, Embed, MessagePayload};

use super::Validation;

/// Maximum message content length.
pub const MAX_CONTENT_LEN: usize = 2000;
/// Maximum embeds per message.
pub const MAX_EMBEDS: usize = 10;
/// Maximum stickers per message.
pub const MAX_STICKERS: usize = 3;
/// Maximum embed title length.
pub const MAX_EMBED_TITLE_LEN: usize = 256;
/// Maximum embed description length.
pub const MAX_EMBED_DESCRIPTION_LEN: usize = 4096;
/// Maximum embed footer text length.
pub const MAX_EMBED_FOOTER_LEN: usize = 2048;
/// Maximum embed author name length.
pub const MAX_EMBED_AUTHOR_LEN: usize = 256;
/// Maximum fields per embed.
pub const MAX_EMBED_FIELDS: usize = 25;
/// Maximum embed field name length.
pub const MAX_FIELD_NAME_LEN: usize = 256;
/// Maximum embed field value length.
pub const MAX_FIELD_VALUE_LEN: usize = 1024;
/// Maximum total characters across all embeds of one message.
pub const MAX_TOTAL_EMBED_LEN: usize = 6000;
/// Maximum action rows in the classic component layout.
pub const MAX_ACTION_ROWS: usize = 5;
/// Maximum buttons per action row.
pub const MAX_BUTTONS_PER_ROW: usize = 5;
/// Maximum button label length.
pub const MAX_BUTTON_LABEL_LEN: usize = 80;
/// Maximum component identifier length.
pub const MAX_CUSTOM_ID_LEN: usize = 100;
/// Maximum select placeholder length.
pub const MAX_PLACEHOLDER_LEN: usize = 150;
/// Maximum options per select menu.
pub const MAX_SELECT_OPTIONS: usize = 25;
/// Maximum length of a select option label, description, or value.
pub const MAX_OPTION_TEXT_LEN: usize = 100;
/// Maximum total components in the nested layout, children included.
pub const MAX_V2_COMPONENTS: usize = 40;

/// Validate an outbound message body.
///
/// `is_create` additionally requires at least one content-bearing field,
/// which edits do not (an edit may touch only flags or mentions).
#[must_use]
pub fn validate_message_payload(message: &MessagePayload, is_create: bool) -> Validation {
    if is_create
        && message.content.as_ref().is_none_or(String::is_empty)
        && message.embeds.is_empty()
        && message.sticker_ids.is_empty()
        && message.components.is_empty()
        && message.files.is_empty()
        && message.poll.is_none()
    {
        return Validation::invalid(
            10,
            "Message must have at least one of: content, embeds, sticker_ids, components, files, or poll",
        );
    }

    if message
        .content
        .as_ref()
        .is_some_and(|content| content.chars().count() > MAX_CONTENT_LEN)
    {
        return Validation::invalid(11, "Message content must be 2000 or fewer characters");
    }

    if message.embeds.len() > MAX_EMBEDS {
        return Validation::invalid(12, "Message must have 10 or fewer embeds");
    }

    if message.sticker_ids.len() > MAX_STICKERS {
        return Validation::invalid(13, "Message must have 3 or fewer sticker IDs");
    }

    if !message.embeds.is_empty() {
        if let invalid @ Validation::Invalid { .. } = validate_embeds(&message.embeds) {
            return invalid;
        }
    }

    if !message.components.is_empty() {
        if message.is_components_v2() {
            if count_components(&message.components) > MAX_V2_COMPONENTS {
                return Validation::invalid(34, "V2 message must have 40 or fewer total components");
            }
        } else if let invalid @ Validation::Invalid { .. } =
            validate_v1_components(&message.components)
        {
            return invalid;
        }
    }

    Validation::Valid
}

fn validate_embeds(embeds: &[Embed]) -> Validation {
    let mut total_chars = 0;

    for embed in embeds {
        let title_len = embed.title.as_ref().map_or(0, |t| t.chars().count());
        let description_len = embed.description.as_ref().map_or(0, |d| d.chars().count());
        let footer_len = embed
            .footer
            .as_ref()
            .map_or(0, |footer| footer.text.chars().count());
        let author_len = embed
            .author
            .as_ref()
            .map_or(0, |author| author.name.chars().count());

        if title_len > MAX_EMBED_TITLE_LEN {
            return Validation::invalid(14, "Embed title must be 256 or fewer characters");
        }

        if description_len > MAX_EMBED_DESCRIPTION_LEN {
            return Validation::invalid(15, "Embed description must be 4096 or fewer characters");
        }

        if footer_len > MAX_EMBED_FOOTER_LEN {
            return Validation::invalid(16, "Embed footer text must be 2048 or fewer characters");
        }

        if author_len > MAX_EMBED_AUTHOR_LEN {
            return Validation::invalid(17, "Embed author name must be 256 or fewer characters");
        }

        total_chars += title_len + description_len + footer_len + author_len;

        if embed.fields.len() > MAX_EMBED_FIELDS {
            return Validation::invalid(18, "Each embed must have 25 or fewer fields");
        }

        for field in &embed.fields {
            let name_len = field.name.chars().count();
            let value_len = field.value.chars().count();

            if name_len > MAX_FIELD_NAME_LEN {
                return Validation::invalid(19, "Embed field name must be 256 or fewer characters");
            }

            if value_len > MAX_FIELD_VALUE_LEN {
                return Validation::invalid(
                    20,
                    "Embed field value must be 1024 or fewer characters",
                );
            }

            total_chars += name_len + value_len;
        }
    }

    if total_chars > MAX_TOTAL_EMBED_LEN {
        return Validation::invalid(
            21,
            "Total characters across all embeds must be 6000 or fewer",
        );
    }

    Validation::Valid
}

/// Count a component tree, children included.
fn count_components(components: &[Component]) -> usize {
    components
        .iter()
        .map(|component| 1 + count_components(&component.components))
        .sum()
}

fn validate_v1_components(components: &[Component]) -> Validation {
    if components.len() > MAX_ACTION_ROWS {
        return Validation::invalid(22, "Message must have 5 or fewer action rows");
    }

    for row in components {
        if row.components.is_empty() {
            continue;
        }

        let buttons: Vec<_> = row
            .components
            .iter()
            .filter(|child| child.kind == wd_common::types::ComponentType::Button)
            .collect();
        let selects: Vec<_> = row
            .components
            .iter()
            .filter(|child| child.kind.is_select())
            .collect();

        if !buttons.is_empty() && !selects.is_empty() {
            return Validation::invalid(
                23,
                "Action row cannot contain both buttons and select menus",
            );
        }

        if buttons.len() > MAX_BUTTONS_PER_ROW {
            return Validation::invalid(24, "Action row must have 5 or fewer buttons");
        }

        if selects.len() > 1 {
            return Validation::invalid(25, "Action row must have 1 or fewer select menus");
        }

        for button in &buttons {
            if button
                .label
                .as_ref()
                .is_some_and(|label| label.chars().count() > MAX_BUTTON_LABEL_LEN)
            {
                return Validation::invalid(26, "Button label must be 80 or fewer characters");
            }

            if button
                .custom_id
                .as_ref()
                .is_some_and(|id| id.chars().count() > MAX_CUSTOM_ID_LEN)
            {
                return Validation::invalid(27, "Button custom_id must be 100 or fewer characters");
            }
        }

        for select in &selects {
            if select
                .custom_id
                .as_ref()
                .is_some_and(|id| id.chars().count() > MAX_CUSTOM_ID_LEN)
            {
                return Validation::invalid(
                    28,
                    "Select menu custom_id must be 100 or fewer characters",
                );
            }

            if select
                .placeholder
                .as_ref()
                .is_some_and(|placeholder| placeholder.chars().count() > MAX_PLACEHOLDER_LEN)
            {
                return Validation::invalid(
                    29,
                    "Select menu placeholder must be 150 or fewer characters",
                );
            }

            if select.options.len() > MAX_SELECT_OPTIONS {
                return Validation::invalid(30, "Select menu must have 25 or fewer options");
            }

            for option in &select.options {
                if option.label.chars().count() > MAX_OPTION_TEXT_LEN {
                    return Validation::invalid(
                        31,
                        "Select option label must be 100 or fewer characters",
                    );
                }

                if option
                    .description
                    .as_ref()
                    .is_some_and(|description| description.chars().count() > MAX_OPTION_TEXT_LEN)
                {
                    return Validation::invalid(
                        32,
                        "Select option description must be 100 or fewer characters",
                    );
                }

                if option.value.chars().count() > MAX_OPTION_TEXT_LEN {
                    return Validation::invalid(
                        33,
                        "Select option value must be 100 or fewer characters",
                    );
                }
            }
        }
    }

    Validation::Valid
}
