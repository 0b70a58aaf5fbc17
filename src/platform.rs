//! Platform collaborators: haptic effects, safe-area insets, and the
//! commands the screen emits for an external shell to execute.

/// Host platform, as reported by the shell. Haptics are skipped entirely on
/// `Web`; `Web` also gets fixed additive safe-area padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Platform {
    Ios,
    Android,
    Web,
}

impl Platform {
    pub fn supports_haptics(self) -> bool {
        !matches!(self, Self::Web)
    }
}

/// One-shot haptic effects the shell can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Haptic {
    LightImpact,
    SuccessNotification,
}

/// Safe-area insets supplied by the layout collaborator, in points.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SafeAreaInsets {
    pub top: f64,
    pub bottom: f64,
}

/// Effective top/bottom padding once platform constants are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SafeAreaPadding {
    pub top: f64,
    pub bottom: f64,
}

const WEB_TOP_INSET: f64 = 67.0;
const WEB_BOTTOM_INSET: f64 = 34.0;

impl SafeAreaInsets {
    /// Effective padding after platform-conditional additive constants.
    pub fn padding_for(self, platform: Platform) -> SafeAreaPadding {
        let (extra_top, extra_bottom) = match platform {
            Platform::Web => (WEB_TOP_INSET, WEB_BOTTOM_INSET),
            Platform::Ios | Platform::Android => (0.0, 0.0),
        };
        SafeAreaPadding {
            top: self.top + extra_top,
            bottom: self.bottom + extra_bottom,
        }
    }
}

/// Fire-and-forget side effects produced by interaction handlers. The shell
/// executes them in order; the screen never observes their completion.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Command {
    /// Smooth-scroll the container to a vertical offset in points.
    ScrollTo { y: f64 },
    /// Trigger a one-shot haptic effect.
    Haptic(Haptic),
}
