//! Static screen content: captions, image sources, affirmations, and the
//! letter. Pure configuration — the only invariant worth enforcing is that
//! the caption list and the image source list stay index-aligned.

use crate::foundation::error::{KeepsakeError, KeepsakeResult};

/// Decorative icon kinds referenced by content items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum IconKind {
    Heart,
    Star,
    Sparkles,
    CodeSlash,
    MusicalNotes,
    Sunny,
    Feather,
    MailOpen,
}

/// One gallery entry. Image sources are paired positionally, not by id.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PhotoItem {
    pub id: String,
    pub caption: String,
    pub icon: IconKind,
}

/// One entry of the affirmation list, with its entrance delay.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Affirmation {
    pub text: String,
    pub delay_ms: u64,
    pub icon: IconKind,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Letter {
    pub salutation: String,
    pub paragraphs: Vec<String>,
    pub signoff: String,
}

/// All static copy and asset references for the screen.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Content {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub scroll_button_label: String,
    pub gallery_title: String,
    pub photos: Vec<PhotoItem>,
    /// Image sources, index-aligned with `photos`.
    pub photo_sources: Vec<String>,
    pub about_title: String,
    pub affirmations: Vec<Affirmation>,
    pub letter_title: String,
    pub letter: Letter,
    pub surprise_title: String,
    pub reveal_text: String,
    pub footer_text: String,
}

impl Content {
    pub fn validate(&self) -> KeepsakeResult<()> {
        if self.photos.is_empty() {
            return Err(KeepsakeError::validation("photo list must not be empty"));
        }
        if self.photos.len() != self.photo_sources.len() {
            return Err(KeepsakeError::validation(format!(
                "photo captions ({}) and sources ({}) must be index-aligned",
                self.photos.len(),
                self.photo_sources.len()
            )));
        }
        Ok(())
    }
}

impl Default for Content {
    fn default() -> Self {
        fn photo(id: &str, caption: &str, icon: IconKind) -> PhotoItem {
            PhotoItem {
                id: id.to_owned(),
                caption: caption.to_owned(),
                icon,
            }
        }
        fn affirmation(text: &str, delay_ms: u64, icon: IconKind) -> Affirmation {
            Affirmation {
                text: text.to_owned(),
                delay_ms,
                icon,
            }
        }

        Self {
            hero_title: "Happy Birthday,\nMy Beautiful\nKshitija".to_owned(),
            hero_subtitle:
                "To my talented, kind-hearted girl who codes & sings like an angel."
                    .to_owned(),
            scroll_button_label: "Scroll for a Surprise".to_owned(),
            gallery_title: "Our Memories".to_owned(),
            photos: vec![
                photo("1", "Our first date", IconKind::Heart),
                photo("2", "The first time we met", IconKind::Star),
                photo("3", "That smile I fell in love with", IconKind::Sparkles),
                photo("4", "My forever favorite moment", IconKind::Heart),
            ],
            photo_sources: vec![
                "photo1.jpg".to_owned(),
                "photo3.jpg".to_owned(),
                "photo2.jpg".to_owned(),
                "photo4.jpg".to_owned(),
            ],
            about_title: "Why You're So Special".to_owned(),
            affirmations: vec![
                affirmation(
                    "You are strong, independent and cute.",
                    100,
                    IconKind::Star,
                ),
                affirmation(
                    "You are brilliantly smart and beautifully intelligent.",
                    250,
                    IconKind::CodeSlash,
                ),
                affirmation(
                    "Your singing melts my heart every time.",
                    400,
                    IconKind::MusicalNotes,
                ),
                affirmation("You inspire me every single day.", 550, IconKind::Sunny),
                affirmation(
                    "I'm so lucky to have you in my life.",
                    700,
                    IconKind::Heart,
                ),
            ],
            letter_title: "A Letter to You".to_owned(),
            letter: Letter {
                salutation: "Kshitija,".to_owned(),
                paragraphs: vec![
                    "On your special day, I want to tell you how I feel. I love you deeply, \
                     and I see you as my happiness, my peace, and my greatest blessing."
                        .to_owned(),
                    "I admire you more every day as I watch you chase your dreams, work so \
                     hard, and sing with passion."
                        .to_owned(),
                    "I promise to stand beside you, support you, and celebrate you through \
                     every moment, today and always."
                        .to_owned(),
                ],
                signoff: "Happy Birthday, my love".to_owned(),
            },
            surprise_title: "Will You Keep Being\nMy Forever?".to_owned(),
            reveal_text: "Forever Starts Now".to_owned(),
            footer_text: "Made with \u{2764} for Kshitija".to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/content.rs"]
mod tests;
