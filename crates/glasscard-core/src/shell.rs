//! Card Shell
//!
//! The container every card renders through. Holds the resolved resting
//! style, the identity, and the hover/focus transition.
//!
//! ## Hover transition
//!
//! Pointer-enter and focus-in engage hover; the card disengages only once
//! the pointer has left *and* focus has moved away. The hover amount moves
//! toward its target at a constant rate so a full swing takes exactly
//! `transition_ms`. Changing direction mid-flight continues from the
//! current amount.

use std::time::Duration;

use crate::a11y::{AccessibilityBinding, AriaAttributes};
use crate::error::{CardError, CardResult};
use crate::identity::CardIdentity;
use crate::render::{CardRenderer, ShellFrame};
use crate::style::paint::ThemeMode;
use crate::style::{resolve, ShellFamily, SizeClass, StructuralVariant, StyleSpec, VisualTier};

/// Anything that can fill a card's content slot
pub trait SlotContent {
    fn is_present(&self) -> bool;
}

impl SlotContent for str {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl SlotContent for String {
    fn is_present(&self) -> bool {
        self.as_str().is_present()
    }
}

impl<T> SlotContent for [T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> SlotContent for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: SlotContent> SlotContent for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(SlotContent::is_present)
    }
}

/// Render results: present when rendering succeeded with something to show.
impl<T: SlotContent, E> SlotContent for Result<T, E> {
    fn is_present(&self) -> bool {
        self.as_ref().is_ok_and(SlotContent::is_present)
    }
}

impl<T: SlotContent + ?Sized> SlotContent for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

/// Configuration of one shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOptions {
    pub tier: VisualTier,
    pub variant: StructuralVariant,
    pub size: SizeClass,
    pub interactive: bool,
    pub theme: ThemeMode,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            tier: VisualTier::default(),
            variant: StructuralVariant::default(),
            size: SizeClass::default(),
            interactive: true,
            theme: ThemeMode::default(),
        }
    }
}

impl ShellOptions {
    pub fn resolve(&self) -> StyleSpec {
        resolve(self.tier, self.variant, self.size)
    }

    fn card_name(&self) -> &'static str {
        match self.variant.family() {
            ShellFamily::Shell => "GlassCard",
            ShellFamily::Frosted => "FrostedCard",
        }
    }
}

/// Pointer and focus input that drives hover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellInput {
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
}

/// Whether the pointer is over the card and whether it holds focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interaction {
    pub pointer_inside: bool,
    pub focused: bool,
}

impl Interaction {
    pub fn apply(&mut self, input: ShellInput) {
        match input {
            ShellInput::PointerEnter => self.pointer_inside = true,
            ShellInput::PointerLeave => self.pointer_inside = false,
            ShellInput::FocusIn => self.focused = true,
            ShellInput::FocusOut => self.focused = false,
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.pointer_inside || self.focused
    }
}

/// Interpolated hover amount between 0 (resting) and 1 (hovered)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverTransition {
    amount: f32,
    target: f32,
    duration: Duration,
}

impl HoverTransition {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            amount: 0.0,
            target: 0.0,
            duration: Duration::from_millis(u64::from(duration_ms)),
        }
    }

    /// Aim at hovered (`true`) or resting (`false`).
    ///
    /// The current amount is kept; only the direction changes.
    pub fn set_engaged(&mut self, engaged: bool) {
        self.target = if engaged { 1.0 } else { 0.0 };
    }

    /// Move toward the target by `elapsed`. Returns the new amount.
    pub fn advance(&mut self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            self.amount = self.target;
            return self.amount;
        }
        let step = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.amount = if self.amount < self.target {
            (self.amount + step).min(self.target)
        } else {
            (self.amount - step).max(self.target)
        };
        self.amount
    }

    /// Jump straight to the target
    pub fn finish(&mut self) {
        self.amount = self.target;
    }

    pub fn amount(&self) -> f32 {
        self.amount
    }

    pub fn is_engaged(&self) -> bool {
        self.target > 0.0
    }
}

/// A constructed card container
#[derive(Debug, Clone)]
pub struct CardShell {
    options: ShellOptions,
    identity: CardIdentity,
    spec: StyleSpec,
    interaction: Interaction,
    hover: HoverTransition,
}

impl CardShell {
    /// Build a shell. Fails when `content` is empty.
    pub fn new<C>(options: ShellOptions, identity: CardIdentity, content: &C) -> CardResult<Self>
    where
        C: SlotContent + ?Sized,
    {
        if !content.is_present() {
            return Err(CardError::MissingContent {
                card: options.card_name(),
            });
        }

        let spec = options.resolve();
        tracing::debug!(
            card = options.card_name(),
            tier = %options.tier,
            variant = %options.variant,
            size = %options.size,
            "card shell constructed"
        );

        Ok(Self {
            options,
            identity,
            hover: HoverTransition::new(spec.transition_ms),
            spec,
            interaction: Interaction::default(),
        })
    }

    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    pub fn identity(&self) -> &CardIdentity {
        &self.identity
    }

    /// Resting style, without hover
    pub fn spec(&self) -> &StyleSpec {
        &self.spec
    }

    pub fn is_interactive(&self) -> bool {
        self.options.interactive
    }

    fn sync_hover(&mut self) {
        let engaged = self.options.interactive && self.interaction.is_engaged();
        self.hover.set_engaged(engaged);
    }

    /// Feed one pointer/focus input. Non-interactive shells only accept
    /// inputs that disengage.
    pub fn handle(&mut self, input: ShellInput) {
        let engaging = matches!(input, ShellInput::PointerEnter | ShellInput::FocusIn);
        if engaging && !self.options.interactive {
            return;
        }
        self.interaction.apply(input);
        self.sync_hover();
    }

    pub fn pointer_enter(&mut self) {
        self.handle(ShellInput::PointerEnter);
    }

    pub fn pointer_leave(&mut self) {
        self.handle(ShellInput::PointerLeave);
    }

    pub fn focus_in(&mut self) {
        self.handle(ShellInput::FocusIn);
    }

    pub fn focus_out(&mut self) {
        self.handle(ShellInput::FocusOut);
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Adopt interaction state kept by a host across re-renders
    pub fn restore(&mut self, interaction: Interaction) {
        self.interaction = if self.options.interactive {
            interaction
        } else {
            Interaction::default()
        };
        self.sync_hover();
    }

    /// Whether hover is currently requested
    pub fn is_engaged(&self) -> bool {
        self.hover.is_engaged()
    }

    /// Advance the hover interpolation by `elapsed`
    pub fn advance(&mut self, elapsed: Duration) -> f32 {
        self.hover.advance(elapsed)
    }

    /// Jump the interpolation to its target (hosts that animate natively)
    pub fn settle(&mut self) {
        self.hover.finish();
    }

    pub fn hover(&self) -> &HoverTransition {
        &self.hover
    }

    /// Resting style with the current hover amount applied
    pub fn current_style(&self) -> StyleSpec {
        self.spec.with_hover(self.hover.amount())
    }

    /// Attributes for a shell without its own state
    pub fn aria(&self) -> AriaAttributes {
        let binding = AccessibilityBinding::new(&self.identity);
        if self.options.interactive {
            binding.for_action()
        } else {
            binding.for_static()
        }
    }

    /// Everything a renderer needs for the current frame
    pub fn frame(&self, aria: AriaAttributes) -> ShellFrame {
        ShellFrame {
            style: self.current_style(),
            aria,
            theme: self.options.theme,
        }
    }

    pub fn render<R: CardRenderer>(
        &self,
        renderer: &R,
        aria: AriaAttributes,
        children: R::Node,
    ) -> R::Node {
        renderer.render(&self.frame(aria), children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FrostedVariant;

    fn shell(options: ShellOptions) -> CardShell {
        let identity = CardIdentity::new("Weather", None).unwrap();
        CardShell::new(options, identity, "Sunny, 24°").unwrap()
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn empty_content_is_construction_error() {
        let identity = CardIdentity::new("Weather", None).unwrap();
        let err = CardShell::new(ShellOptions::default(), identity.clone(), "  ").unwrap_err();
        assert!(matches!(err, CardError::MissingContent { card: "GlassCard" }));

        let options = ShellOptions {
            variant: FrostedVariant::Navigation.into(),
            ..ShellOptions::default()
        };
        let empty: Vec<u8> = Vec::new();
        let err = CardShell::new(options, identity, &empty).unwrap_err();
        assert!(matches!(err, CardError::MissingContent { card: "FrostedCard" }));
    }

    #[test]
    fn slot_content_impls() {
        assert!(Some("text").is_present());
        assert!(!None::<&str>.is_present());
        assert!(Ok::<&str, ()>("text").is_present());
        assert!(!Err::<&str, ()>(()).is_present());
        assert!(vec![1].is_present());
    }

    #[test]
    fn successful_but_empty_result_is_missing_content() {
        let identity = CardIdentity::new("Weather", None).unwrap();
        let rendered: Result<String, ()> = Ok(String::new());
        assert!(!rendered.is_present());

        let err = CardShell::new(ShellOptions::default(), identity, &rendered).unwrap_err();
        assert!(matches!(err, CardError::MissingContent { card: "GlassCard" }));
    }

    #[test]
    fn hover_transition_is_time_bounded() {
        let mut card = shell(ShellOptions::default());
        card.pointer_enter();

        card.advance(ms(150));
        assert!((card.hover().amount() - 0.5).abs() < 1e-3);

        card.advance(ms(150));
        assert!((card.hover().amount() - 1.0).abs() < 1e-3);

        card.advance(ms(1000));
        assert_eq!(card.hover().amount(), 1.0);
        assert_eq!(card.current_style(), card.spec().with_hover(1.0));
    }

    #[test]
    fn reentering_resumes_from_current_amount() {
        let mut card = shell(ShellOptions::default());
        card.pointer_enter();
        card.advance(ms(300));

        card.pointer_leave();
        card.advance(ms(90));
        let mid = card.hover().amount();
        assert!((mid - 0.7).abs() < 1e-3);

        card.pointer_enter();
        assert_eq!(card.hover().amount(), mid);
        card.advance(ms(30));
        assert!((card.hover().amount() - 0.8).abs() < 1e-3);
        card.advance(ms(60));
        assert!((card.hover().amount() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn focus_keeps_hover_after_pointer_leaves() {
        let mut card = shell(ShellOptions::default());
        card.pointer_enter();
        card.focus_in();
        card.pointer_leave();
        assert!(card.is_engaged());

        card.focus_out();
        assert!(!card.is_engaged());
    }

    #[test]
    fn non_interactive_shell_ignores_hover() {
        let mut card = shell(ShellOptions {
            interactive: false,
            ..ShellOptions::default()
        });
        card.pointer_enter();
        card.focus_in();
        card.advance(ms(300));

        assert_eq!(card.hover().amount(), 0.0);
        assert_eq!(&card.current_style(), card.spec());
        assert!(!card.aria().focusable);
    }

    #[test]
    fn hover_never_mutates_resting_spec() {
        let mut card = shell(ShellOptions::default());
        let resting = card.spec().clone();
        card.pointer_enter();
        card.settle();
        assert_eq!(card.spec(), &resting);
        assert_ne!(card.current_style(), resting);
    }

    #[test]
    fn restore_adopts_host_state() {
        let mut card = shell(ShellOptions::default());
        card.restore(Interaction {
            pointer_inside: false,
            focused: true,
        });
        card.settle();
        assert!(card.is_engaged());
        assert_eq!(card.current_style(), card.spec().with_hover(1.0));

        let mut fixed = shell(ShellOptions {
            interactive: false,
            ..ShellOptions::default()
        });
        fixed.restore(Interaction {
            pointer_inside: true,
            focused: true,
        });
        assert_eq!(fixed.interaction(), Interaction::default());
    }
}
