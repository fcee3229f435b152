//! Message component types.
//!
//! Components form a tree: classic messages carry up to five action rows
//! of buttons or a single select menu, while the newer layout flag allows
//! freely nested layout components counted as a whole.

use serde::{Deserialize, Serialize};

use super::channel::UnknownWireValue;

/// Component kind, discriminated by the numeric wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ComponentType {
    /// Horizontal row holding interactive children.
    ActionRow = 1,
    /// Clickable button.
    Button = 2,
    /// Select menu with developer-defined options.
    StringSelect = 3,
    /// Free text input (modals only).
    TextInput = 4,
    /// Select menu of users.
    UserSelect = 5,
    /// Select menu of roles.
    RoleSelect = 6,
    /// Select menu of users and roles.
    MentionableSelect = 7,
    /// Select menu of channels.
    ChannelSelect = 8,
    /// Layout: text with an accessory.
    Section = 9,
    /// Layout: markdown text.
    TextDisplay = 10,
    /// Layout: small image accessory.
    Thumbnail = 11,
    /// Layout: image grid.
    MediaGallery = 12,
    /// Layout: attached file.
    File = 13,
    /// Layout: visual divider.
    Separator = 14,
    /// Layout: container grouping child components.
    Container = 17,
}

impl ComponentType {
    /// Whether this kind counts as a select menu inside an action row.
    #[must_use]
    pub const fn is_select(self) -> bool {
        matches!(
            self,
            Self::StringSelect
                | Self::TextInput
                | Self::UserSelect
                | Self::RoleSelect
                | Self::MentionableSelect
                | Self::ChannelSelect
        )
    }
}

impl From<ComponentType> for u8 {
    fn from(kind: ComponentType) -> Self {
        kind as Self
    }
}

impl TryFrom<u8> for ComponentType {
    type Error = UnknownWireValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::ActionRow),
            2 => Ok(Self::Button),
            3 => Ok(Self::StringSelect),
            4 => Ok(Self::TextInput),
            5 => Ok(Self::UserSelect),
            6 => Ok(Self::RoleSelect),
            7 => Ok(Self::MentionableSelect),
            8 => Ok(Self::ChannelSelect),
            9 => Ok(Self::Section),
            10 => Ok(Self::TextDisplay),
            11 => Ok(Self::Thumbnail),
            12 => Ok(Self::MediaGallery),
            13 => Ok(Self::File),
            14 => Ok(Self::Separator),
            17 => Ok(Self::Container),
            other => Err(UnknownWireValue(other)),
        }
    }
}

/// One option of a string select menu.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectOption {
    /// User-visible option label.
    pub label: String,
    /// Developer-defined option value.
    pub value: String,
    /// Additional description shown under the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the option is selected by default.
    #[serde(default)]
    pub default: bool,
}

/// Generic component node.
///
/// A single structural shape covers every kind; fields that do not apply
/// to a given kind are simply left empty, mirroring the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    /// Component kind.
    #[serde(rename = "type")]
    pub kind: ComponentType,
    /// Button label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Developer-defined identifier reported back on interaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// Select menu placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// String select options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    /// Child components (action rows, sections, containers).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

impl Component {
    /// A bare component of the given kind with nothing set.
    #[must_use]
    pub const fn new(kind: ComponentType) -> Self {
        Self {
            kind,
            label: None,
            custom_id: None,
            placeholder: None,
            options: Vec::new(),
            components: Vec::new(),
        }
    }

    /// An action row holding the given children.
    #[must_use]
    pub fn action_row(components: Vec<Self>) -> Self {
        Self {
            components,
            ..Self::new(ComponentType::ActionRow)
        }
    }

    /// A button with a label and identifier.
    #[must_use]
    pub fn button(label: impl Into<String>, custom_id: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            custom_id: Some(custom_id.into()),
            ..Self::new(ComponentType::Button)
        }
    }

    /// A string select menu with an identifier and options.
    #[must_use]
    pub fn string_select(custom_id: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            custom_id: Some(custom_id.into()),
            options,
            ..Self::new(ComponentType::StringSelect)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_kinds() {
        assert!(ComponentType::StringSelect.is_select());
        assert!(ComponentType::ChannelSelect.is_select());
        assert!(!ComponentType::Button.is_select());
        assert!(!ComponentType::ActionRow.is_select());
        assert!(!ComponentType::TextDisplay.is_select());
    }

    #[test]
    fn test_component_wire_shape() {
        let row = Component::action_row(vec![Component::button("Go", "go-1")]);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["type"], 1);
        assert_eq!(json["components"][0]["type"], 2);
        assert_eq!(json["components"][0]["label"], "Go");
        assert_eq!(json["components"][0]["custom_id"], "go-1");
    }

    #[test]
    fn test_component_type_rejects_unknown_value() {
        assert!(ComponentType::try_from(16).is_err());
    }
}
