//! The fixed set of page locations whose text depends on the language.

use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use super::translations::TranslationKey;

/// How a location receives its text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Replace the element's text content
    Text,
    /// Set the input's `placeholder` attribute
    Placeholder,
    /// Replace the label of a button that starts with an icon
    IconLabel { icon_class: &'static str },
}

/// A translatable spot on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Location {
    BrandText,
    TimelineTitle,
    PillarsTitle,
    SubscribeTitle,
    SubscribeDescription,
    EmailLabel,
    EmailPlaceholder,
    NameLabel,
    NamePlaceholder,
    AgreeLabel,
    SubmitButton,
}

impl Location {
    /// Every location, in page order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Translation key written into this location.
    #[must_use]
    pub const fn key(self) -> TranslationKey {
        match self {
            Self::BrandText => TranslationKey::BrandName,
            Self::TimelineTitle => TranslationKey::TimelineTitle,
            Self::PillarsTitle => TranslationKey::PillarsTitle,
            Self::SubscribeTitle => TranslationKey::SubscribeTitle,
            Self::SubscribeDescription => TranslationKey::SubscribeDesc,
            // The email field has no dedicated placeholder text.
            Self::EmailLabel | Self::EmailPlaceholder => TranslationKey::EmailLabel,
            Self::NameLabel => TranslationKey::NameLabel,
            Self::NamePlaceholder => TranslationKey::NamePlaceholder,
            Self::AgreeLabel => TranslationKey::AgreeLabel,
            Self::SubmitButton => TranslationKey::SubmitBtn,
        }
    }

    /// CSS selector of the element backing this location.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::BrandText => "#brandText",
            Self::TimelineTitle => "[data-i18n=\"timeline-title\"]",
            Self::PillarsTitle => "[data-i18n=\"pillars-title\"]",
            Self::SubscribeTitle => "[data-i18n=\"subscribe-title\"]",
            Self::SubscribeDescription => "[data-i18n=\"subscribe-desc\"]",
            Self::EmailLabel => "label[for=\"emailInput\"]",
            Self::EmailPlaceholder => "#emailInput",
            Self::NameLabel => "label[for=\"nameInput\"]",
            Self::NamePlaceholder => "#nameInput",
            Self::AgreeLabel => "label[for=\"agreeCheck\"]",
            Self::SubmitButton => "#subscriptionForm button[type=\"submit\"]",
        }
    }

    /// Where the text goes inside the element.
    #[must_use]
    pub const fn slot(self) -> Slot {
        match self {
            Self::EmailPlaceholder | Self::NamePlaceholder => Slot::Placeholder,
            Self::SubmitButton => Slot::IconLabel {
                icon_class: "bi bi-bell",
            },
            _ => Slot::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_selectors_are_distinct() {
        let selectors: HashSet<_> = Location::all().map(Location::selector).collect();
        assert_eq!(selectors.len(), Location::all().count());
    }

    #[test]
    fn test_placeholders_use_placeholder_slot() {
        assert_eq!(Location::EmailPlaceholder.slot(), Slot::Placeholder);
        assert_eq!(Location::NamePlaceholder.slot(), Slot::Placeholder);
        assert_eq!(Location::BrandText.slot(), Slot::Text);
    }

    #[test]
    fn test_email_placeholder_reuses_label_text() {
        assert_eq!(Location::EmailPlaceholder.key(), Location::EmailLabel.key());
    }

    #[test]
    fn test_submit_button_keeps_icon() {
        assert!(matches!(
            Location::SubmitButton.slot(),
            Slot::IconLabel { icon_class } if icon_class.contains("bi-bell")
        ));
    }
}
