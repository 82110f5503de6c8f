//! Typed keyword enumerations for keyword-valued properties.
//!
//! Each enum converts into [`Value::Keyword`] with its CSS spelling, so the
//! builder can accept `Display::Block` where a raw string would otherwise be
//! needed.

use std::fmt;

use super::Value;

macro_rules! css_keywords {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $css:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// The CSS text for this keyword.
            pub const fn as_css(self) -> &'static str {
                match self {
                    $( Self::$variant => $css ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_css())
            }
        }

        impl From<$name> for Value {
            fn from(keyword: $name) -> Self {
                Value::Keyword(keyword.as_css().to_string())
            }
        }
    };
}

css_keywords! {
    /// Native control appearance.
    Appearance {
        None => "none",
        Auto => "auto",
        Button => "button",
        Textfield => "textfield",
        MenulistButton => "menulist-button",
    }
}

css_keywords! {
    /// Table border model.
    BorderCollapse {
        Collapse => "collapse",
        Separate => "separate",
    }
}

css_keywords! {
    /// Border line style.
    BorderStyle {
        None => "none",
        Hidden => "hidden",
        Solid => "solid",
        Dashed => "dashed",
        Dotted => "dotted",
        Double => "double",
        Groove => "groove",
        Ridge => "ridge",
        Inset => "inset",
        Outset => "outset",
    }
}

css_keywords! {
    /// Box sizing model.
    BoxSizing {
        BorderBox => "border-box",
        ContentBox => "content-box",
    }
}

css_keywords! {
    /// Cursor style.
    Cursor {
        Auto => "auto",
        Default => "default",
        /// Pointing hand cursor (for clickable elements).
        Pointer => "pointer",
        Text => "text",
        Move => "move",
        NotAllowed => "not-allowed",
        Wait => "wait",
        Progress => "progress",
        Help => "help",
        Crosshair => "crosshair",
        Grab => "grab",
        Grabbing => "grabbing",
    }
}

css_keywords! {
    /// Display type.
    Display {
        None => "none",
        Block => "block",
        Inline => "inline",
        InlineBlock => "inline-block",
        Flex => "flex",
        InlineFlex => "inline-flex",
        Grid => "grid",
        InlineGrid => "inline-grid",
        FlowRoot => "flow-root",
        Contents => "contents",
        ListItem => "list-item",
        Table => "table",
        TableRow => "table-row",
        TableCell => "table-cell",
    }
}

css_keywords! {
    /// Generic font stacks.
    FontFamily {
        /// System sans-serif stack with emoji fallbacks.
        Sans => r#"ui-sans-serif, system-ui, sans-serif, "Apple Color Emoji", "Segoe UI Emoji", "Segoe UI Symbol", "Noto Color Emoji""#,
        /// System serif stack.
        Serif => r#"ui-serif, Georgia, Cambria, "Times New Roman", Times, serif"#,
        /// System monospace stack.
        Mono => r#"ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", "Courier New", monospace"#,
    }
}

css_keywords! {
    /// Font style.
    FontStyle {
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
    }
}

css_keywords! {
    /// Font weight.
    FontWeight {
        Thin => "100",
        ExtraLight => "200",
        Light => "300",
        Normal => "400",
        Medium => "500",
        SemiBold => "600",
        Bold => "700",
        ExtraBold => "800",
        Black => "900",
        /// One step bolder than the parent.
        Bolder => "bolder",
        /// One step lighter than the parent.
        Lighter => "lighter",
    }
}

css_keywords! {
    /// List marker position.
    ListStylePosition {
        Inside => "inside",
        Outside => "outside",
    }
}

css_keywords! {
    /// List marker type.
    ListStyleType {
        None => "none",
        Disc => "disc",
        Circle => "circle",
        Square => "square",
        Decimal => "decimal",
    }
}

css_keywords! {
    /// Positioning scheme.
    Position {
        Static => "static",
        Relative => "relative",
        Absolute => "absolute",
        Fixed => "fixed",
        Sticky => "sticky",
    }
}

css_keywords! {
    /// Text alignment.
    TextAlign {
        Start => "start",
        End => "end",
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
    }
}

css_keywords! {
    /// Text decoration line.
    TextDecorationLine {
        None => "none",
        Underline => "underline",
        Overline => "overline",
        LineThrough => "line-through",
    }
}

css_keywords! {
    /// Text decoration line style.
    TextDecorationStyle {
        Solid => "solid",
        Double => "double",
        Dotted => "dotted",
        Dashed => "dashed",
        Wavy => "wavy",
    }
}

css_keywords! {
    /// Vertical alignment.
    VerticalAlign {
        Baseline => "baseline",
        Top => "top",
        Middle => "middle",
        Bottom => "bottom",
        TextTop => "text-top",
        TextBottom => "text-bottom",
        Sub => "sub",
        Super => "super",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_convert_to_values() {
        assert_eq!(Value::from(Display::ListItem), Value::keyword("list-item"));
        assert_eq!(Value::from(BoxSizing::BorderBox), Value::keyword("border-box"));
        assert_eq!(Value::from(FontWeight::Bolder), Value::keyword("bolder"));
    }

    #[test]
    fn font_stacks() {
        assert!(FontFamily::Mono.as_css().ends_with("monospace"));
        assert!(FontFamily::Sans.as_css().starts_with("ui-sans-serif"));
        assert_eq!(FontFamily::Serif.to_string(), FontFamily::Serif.as_css());
    }
}
