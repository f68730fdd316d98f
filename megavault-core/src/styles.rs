//! Style variant tables for the button, input and checkbox primitives.
//!
//! Every visual option is a closed enum mapped to a fixed utility-class
//! string. Components compose base + variant + size + radius + caller
//! classes with [`compose`].

pub const BUTTON_BASE: &str = "relative inline-flex items-center justify-center gap-2 whitespace-nowrap text-sm font-medium transition-colors outline-none disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg]:shrink-0";
pub const INPUT_BASE: &str = "inline-flex disabled:opacity-50 font-medium disabled:pointer-events-none transition-colors outline-none";
pub const INPUT_LABEL_BASE: &str = "flex ml-2 mb-2 font-medium items-center gap-2";
pub const CHECKBOX_BASE: &str = "peer shrink-0 border flex items-center justify-center ring-offset-background focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";
pub const CHECKBOX_LABEL_BASE: &str = "font-medium";

/// Join class fragments with single spaces, skipping empty ones.
#[must_use]
pub fn compose(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Corner rounding shared by the button, input and checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radius {
    #[default]
    Normal,
    Full,
}

impl Radius {
    #[must_use]
    pub const fn button(self) -> &'static str {
        match self {
            Self::Normal => "rounded-lg",
            Self::Full => "rounded-full",
        }
    }

    #[must_use]
    pub const fn input(self) -> &'static str {
        match self {
            Self::Normal => "rounded",
            Self::Full => "rounded-full",
        }
    }

    #[must_use]
    pub const fn checkbox(self) -> &'static str {
        match self {
            Self::Normal => "rounded-md",
            Self::Full => "rounded-full",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    ContainedPrimary,
    ContainedSecondary,
    ContainedAccent,
    OutlinedPrimary,
    OutlinedSecondary,
    OutlinedAccent,
    GhostPrimary,
    GhostSecondary,
    GhostAccent,
    LinkPrimary,
    LinkSecondary,
    LinkAccent,
    Muted,
    Disabled,
}

impl ButtonVariant {
    pub const ALL: [Self; 14] = [
        Self::ContainedPrimary,
        Self::ContainedSecondary,
        Self::ContainedAccent,
        Self::OutlinedPrimary,
        Self::OutlinedSecondary,
        Self::OutlinedAccent,
        Self::GhostPrimary,
        Self::GhostSecondary,
        Self::GhostAccent,
        Self::LinkPrimary,
        Self::LinkSecondary,
        Self::LinkAccent,
        Self::Muted,
        Self::Disabled,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ContainedPrimary => "contained-primary",
            Self::ContainedSecondary => "contained-secondary",
            Self::ContainedAccent => "contained-accent",
            Self::OutlinedPrimary => "outlined-primary",
            Self::OutlinedSecondary => "outlined-secondary",
            Self::OutlinedAccent => "outlined-accent",
            Self::GhostPrimary => "ghost-primary",
            Self::GhostSecondary => "ghost-secondary",
            Self::GhostAccent => "ghost-accent",
            Self::LinkPrimary => "link-primary",
            Self::LinkSecondary => "link-secondary",
            Self::LinkAccent => "link-accent",
            Self::Muted => "muted",
            Self::Disabled => "disabled",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }

    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::ContainedPrimary => "bg-primary text-primary-foreground hover:bg-primary/80",
            Self::ContainedSecondary => {
                "bg-secondary text-secondary-foreground hover:bg-secondary/80"
            }
            Self::ContainedAccent => "bg-accent text-accent-foreground hover:bg-accent/80",
            Self::OutlinedPrimary => {
                "border border-primary text-foreground hover:bg-primary/80 hover:text-primary-foreground"
            }
            Self::OutlinedSecondary => {
                "border border-secondary text-foreground hover:bg-secondary/80 hover:text-secondary-foreground"
            }
            Self::OutlinedAccent => {
                "border border-accent text-foreground hover:bg-accent/80 hover:text-accent-foreground"
            }
            Self::GhostPrimary => "text-primary hover:bg-primary/90 hover:text-primary-foreground",
            Self::GhostSecondary => {
                "text-secondary hover:bg-secondary/90 hover:text-secondary-foreground"
            }
            Self::GhostAccent => "text-accent hover:bg-accent/90 hover:text-accent-foreground",
            Self::LinkPrimary => "text-primary hover:underline",
            Self::LinkSecondary => "text-secondary hover:underline",
            Self::LinkAccent => "text-accent hover:underline",
            Self::Muted => "bg-muted text-muted-foreground hover:bg-muted/80",
            Self::Disabled => "bg-muted/60 text-muted-foreground/50",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
    IconSm,
    IconLg,
}

impl ButtonSize {
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Default => "h-8 px-4 py-2 text-sm",
            Self::Sm => "h-6 px-2 py-1 text-xs",
            Self::Lg => "h-9 px-5 py-2 text-base",
            Self::Icon => "h-8 w-8 [&_svg]:size-5",
            Self::IconSm => "h-6 w-6 [&_svg]:size-4",
            Self::IconLg => "h-10 w-10 [&_svg]:size-6",
        }
    }
}

/// Full class string for a button.
#[must_use]
pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    radius: Radius,
    extra: &str,
) -> String {
    compose(&[
        BUTTON_BASE,
        radius.button(),
        variant.classes(),
        size.classes(),
        extra,
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    #[default]
    ContainedPrimary,
    ContainedSecondary,
    ContainedAccent,
    ContainedMuted,
    ContainedCard,
    OutlinedPrimary,
    OutlinedSecondary,
    OutlinedAccent,
    OutlinedMuted,
    OutlinedCard,
}

impl InputVariant {
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::ContainedPrimary => {
                "bg-primary text-primary-foreground hover:bg-primary/90 focus:bg-primary/80 placeholder:text-primary-foreground/50"
            }
            Self::ContainedSecondary => {
                "bg-secondary text-secondary-foreground hover:bg-secondary/90 focus:bg-secondary/80 placeholder:text-secondary-foreground/60"
            }
            Self::ContainedAccent => {
                "bg-accent text-accent-foreground hover:bg-accent/90 focus:bg-accent/80 placeholder:text-accent-foreground/50"
            }
            Self::ContainedMuted => {
                "bg-muted text-muted-foreground hover:bg-muted/90 focus:bg-muted/80 placeholder:text-muted-foreground/50"
            }
            Self::ContainedCard => {
                "bg-card text-card-foreground hover:bg-card/90 focus:bg-card/80 placeholder:text-card-foreground/50"
            }
            Self::OutlinedPrimary => {
                "bg-transparent border border-primary text-foreground hover:bg-primary/10 focus:bg-primary placeholder:text-foreground/50 focus:text-primary-foreground"
            }
            Self::OutlinedSecondary => {
                "bg-transparent border border-secondary text-foreground hover:bg-secondary/10 focus:bg-secondary placeholder:text-foreground/50 focus:text-secondary-foreground"
            }
            Self::OutlinedAccent => {
                "bg-transparent border border-accent text-foreground hover:bg-accent/10 focus:bg-accent placeholder:text-foreground/50 focus:text-accent-foreground"
            }
            Self::OutlinedMuted => {
                "bg-transparent border border-white/70 text-foreground hover:bg-muted/10 focus:bg-muted placeholder:text-foreground/50 focus:text-muted-foreground"
            }
            Self::OutlinedCard => {
                "bg-transparent border border-primary/50 text-foreground hover:bg-card/10 focus:bg-card placeholder:text-foreground/50 focus:text-card-foreground"
            }
        }
    }
}

/// Text size shared by the input field and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    #[default]
    Default,
    Sm,
    Lg,
}

impl FontSize {
    #[must_use]
    pub const fn input(self) -> &'static str {
        match self {
            Self::Default => "px-4 py-2 text-base",
            Self::Sm => "px-3 py-1 text-sm",
            Self::Lg => "px-5 py-3 text-lg",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "text-base [&_svg]:size-5",
            Self::Sm => "text-sm [&_svg]:size-4",
            Self::Lg => "text-lg [&_svg]:size-6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelColor {
    Dark,
    #[default]
    Light,
}

impl LabelColor {
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Dark => "text-background",
            Self::Light => "text-foreground",
        }
    }
}

#[must_use]
pub fn input_classes(
    variant: InputVariant,
    font_size: FontSize,
    radius: Radius,
    extra: &str,
) -> String {
    compose(&[
        INPUT_BASE,
        radius.input(),
        variant.classes(),
        font_size.input(),
        extra,
    ])
}

#[must_use]
pub fn input_label_classes(font_size: FontSize, color: LabelColor, extra: &str) -> String {
    compose(&[INPUT_LABEL_BASE, color.classes(), font_size.label(), extra])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckboxVariant {
    #[default]
    Primary,
    Secondary,
    Accent,
    Muted,
}

impl CheckboxVariant {
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Primary => {
                "border-primary data-[state=checked]:bg-primary data-[state=checked]:text-primary-foreground"
            }
            Self::Secondary => {
                "border-secondary data-[state=checked]:bg-secondary data-[state=checked]:text-secondary-foreground"
            }
            Self::Accent => {
                "border-accent data-[state=checked]:bg-accent data-[state=checked]:text-accent-foreground"
            }
            Self::Muted => {
                "border-muted data-[state=checked]:bg-muted data-[state=checked]:text-muted-foreground"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckboxSize {
    #[default]
    Default,
    Sm,
    Lg,
}

impl CheckboxSize {
    #[must_use]
    pub const fn box_classes(self) -> &'static str {
        match self {
            Self::Default => "w-1 h-1 p-[0.65rem] [&_svg]:size-4",
            Self::Sm => "w-1 h-1 p-[0.55rem] [&_svg]:size-3",
            Self::Lg => "w-1 h-1 p-[0.85rem] [&_svg]:size-5",
        }
    }

    #[must_use]
    pub const fn label_classes(self) -> &'static str {
        match self {
            Self::Default => "text-base",
            Self::Sm => "text-sm",
            Self::Lg => "text-lg",
        }
    }
}

#[must_use]
pub fn checkbox_classes(
    variant: CheckboxVariant,
    size: CheckboxSize,
    radius: Radius,
    extra: &str,
) -> String {
    compose(&[
        CHECKBOX_BASE,
        radius.checkbox(),
        variant.classes(),
        size.box_classes(),
        extra,
    ])
}

#[must_use]
pub fn checkbox_label_classes(size: CheckboxSize, color: LabelColor, extra: &str) -> String {
    compose(&[CHECKBOX_LABEL_BASE, color.classes(), size.label_classes(), extra])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_skips_blank_fragments() {
        assert_eq!(compose(&["a b", "", "  ", " c "]), "a b c");
        assert_eq!(compose(&[]), "");
    }

    #[test]
    fn defaults_match_the_design_system() {
        assert_eq!(ButtonVariant::default().key(), "contained-primary");
        assert_eq!(ButtonSize::default(), ButtonSize::Default);
        assert_eq!(Radius::default(), Radius::Normal);
        assert_eq!(InputVariant::default(), InputVariant::ContainedPrimary);
        assert_eq!(LabelColor::default(), LabelColor::Light);
        assert_eq!(CheckboxVariant::default(), CheckboxVariant::Primary);
    }

    #[test]
    fn button_keys_round_trip() {
        for variant in ButtonVariant::ALL {
            assert_eq!(ButtonVariant::from_key(variant.key()), Some(variant));
            assert!(!variant.classes().is_empty());
        }
        assert!(ButtonVariant::from_key("contained-danger").is_none());
    }

    #[test]
    fn button_classes_layer_base_variant_size_and_extra() {
        let classes = button_classes(
            ButtonVariant::OutlinedAccent,
            ButtonSize::Lg,
            Radius::Full,
            "max-sm:w-full",
        );
        assert!(classes.starts_with("relative inline-flex"));
        assert!(classes.contains("rounded-full"));
        assert!(classes.contains("border-accent"));
        assert!(classes.contains("h-9 px-5"));
        assert!(classes.ends_with("max-sm:w-full"));
    }

    #[test]
    fn radius_differs_per_primitive() {
        assert_eq!(Radius::Normal.button(), "rounded-lg");
        assert_eq!(Radius::Normal.input(), "rounded");
        assert_eq!(Radius::Normal.checkbox(), "rounded-md");
        assert_eq!(Radius::Full.input(), "rounded-full");
    }

    #[test]
    fn input_and_label_share_font_size() {
        let input = input_classes(InputVariant::OutlinedCard, FontSize::Sm, Radius::Normal, "");
        assert!(input.contains("px-3 py-1 text-sm"));
        assert!(input.contains("border-primary/50"));
        let label = input_label_classes(FontSize::Sm, LabelColor::Dark, "");
        assert!(label.contains("text-sm [&_svg]:size-4"));
        assert!(label.contains("text-background"));
    }

    #[test]
    fn checkbox_classes_follow_variant() {
        let classes = checkbox_classes(CheckboxVariant::Accent, CheckboxSize::Sm, Radius::Full, "");
        assert!(classes.contains("border-accent"));
        assert!(classes.contains("p-[0.55rem]"));
        assert!(classes.contains("rounded-full"));
        assert_eq!(
            checkbox_label_classes(CheckboxSize::Lg, LabelColor::Light, ""),
            "font-medium text-foreground text-lg"
        );
    }
}
