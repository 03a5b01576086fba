// SPDX-License-Identifier: MPL-2.0
//! Outbound texts: the contact request posted to the messaging endpoint and
//! the pre-filled order message carried by the chat deep link.
//!
//! Both texts are fixed Russian templates; the recipient reads them as-is
//! whatever language the UI is shown in.

use crate::catalog::Price;
use crate::error::NotifyError;
use chrono::NaiveDateTime;

/// Wall-clock format of the submission timestamp.
const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// A validated contact request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    phone: String,
    item_title: Option<String>,
    submitted_at: NaiveDateTime,
}

impl ContactMessage {
    /// Validates `phone` and stamps the request.
    ///
    /// # Errors
    ///
    /// [`NotifyError::EmptyPhone`] when `phone` is blank.
    pub fn new(
        phone: &str,
        item_title: Option<&str>,
        submitted_at: NaiveDateTime,
    ) -> Result<Self, NotifyError> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(NotifyError::EmptyPhone);
        }
        Ok(Self {
            phone: phone.to_string(),
            item_title: item_title.map(str::to_string),
            submitted_at,
        })
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn item_title(&self) -> Option<&str> {
        self.item_title.as_deref()
    }

    /// Message body sent to the recipient.
    #[must_use]
    pub fn text(&self) -> String {
        let mut text = match &self.item_title {
            Some(_) => String::from("🖼 Новая заявка на картину\n"),
            None => String::from("📞 Новая заявка на консультацию\n"),
        };
        text.push_str(&format!("Телефон: {}\n", self.phone));
        if let Some(title) = &self.item_title {
            text.push_str(&format!("Картина: {}\n", title));
        }
        text.push_str(&format!(
            "Время: {}",
            self.submitted_at.format(TIMESTAMP_FORMAT)
        ));
        text
    }
}

/// Pre-filled chat message for ordering `title` at `price`.
#[must_use]
pub fn order_text(title: &str, price: Price) -> String {
    format!("Хочу заказать картину \"{}\" за {}", title, price.with_currency())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 8)
            .and_then(|date| date.and_hms_opt(9, 5, 0))
            .expect("valid timestamp")
    }

    #[test]
    fn blank_phone_is_rejected() {
        assert_eq!(
            ContactMessage::new("   ", None, stamp()),
            Err(NotifyError::EmptyPhone)
        );
        assert_eq!(
            ContactMessage::new("", None, stamp()),
            Err(NotifyError::EmptyPhone)
        );
    }

    #[test]
    fn consultation_text_is_timestamped() {
        let message = ContactMessage::new(" +7 900 123-45-67 ", None, stamp()).expect("valid");
        assert_eq!(message.phone(), "+7 900 123-45-67");
        assert_eq!(
            message.text(),
            "📞 Новая заявка на консультацию\nТелефон: +7 900 123-45-67\nВремя: 08.03.2024 09:05"
        );
    }

    #[test]
    fn order_callback_text_names_the_item() {
        let message = ContactMessage::new("89001234567", Some("Дюны"), stamp()).expect("valid");
        let text = message.text();
        assert!(text.starts_with("🖼 Новая заявка на картину\n"));
        assert!(text.contains("Картина: Дюны\n"));
        assert!(text.ends_with("Время: 08.03.2024 09:05"));
    }

    #[test]
    fn order_text_groups_thousands() {
        assert_eq!(
            order_text("X", Price::new(9_900)),
            "Хочу заказать картину \"X\" за 9\u{a0}900 ₽"
        );
    }
}
