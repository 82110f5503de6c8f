//! Baseline reset stylesheet.
//!
//! A normalizing "preflight" layer adapted from Tailwind CSS v4's
//! `preflight.css`, expressed as plain typecss data. The catalog carries no
//! behavior of its own: compile it like any other stylesheet.
//!
//! ```
//! let css = typecss::compile(&typecss_preflight::resets())?;
//! assert!(css.starts_with("*,::after,::before"));
//! # Ok::<(), typecss::Error>(())
//! ```

use typecss::prelude::*;
use typecss::types::scale::{AUTO, FULL, SIZE_0};

/// The reset rules, in cascade order.
pub fn resets() -> Stylesheet {
    [
        Rule::new(
            "*,::after,::before,::backdrop,::file-selector-button",
            Style::new()
                .border(Border::new().width(SIZE_0).style(BorderStyle::Solid))
                .box_sizing(BoxSizing::BorderBox)
                .margin(SIZE_0)
                .padding(SIZE_0),
        ),
        Rule::new(
            "html,:host",
            Style::new()
                .font_family(FontFamily::Sans)
                .line_height(Length::raw(1.5)),
        )
        .custom_props([
            ("-webkit-tap-highlight-color", "transparent"),
            ("-webkit-text-size-adjust", "100%"),
            ("tab-size", "4"),
        ]),
        Rule::new("body", Style::new().line_height(Length::inherit())),
        Rule::new("hr", Style::new().color(Color::Inherit).height(SIZE_0))
            .custom_prop("border-top-width", "1px"),
        Rule::new(
            "abbr:where([title])",
            Style::new()
                .text_decoration_line(TextDecorationLine::Underline)
                .text_decoration_style(TextDecorationStyle::Dotted),
        ),
        Rule::new(
            "h1,h2,h3,h4,h5,h6",
            Style::new()
                .font_size(Length::inherit())
                .inherit(PropertySlot::FontWeight),
        ),
        Rule::new(
            "a",
            Style::new()
                .color(Color::Inherit)
                .inherit(PropertySlot::TextDecorationLine)
                .inherit(PropertySlot::TextDecorationStyle),
        ),
        Rule::new("b,strong", Style::new().font_weight(FontWeight::Bolder)),
        Rule::new(
            "code,kbd,samp,pre",
            Style::new()
                .font_family(FontFamily::Mono)
                .font_size(Length::em(1.0)),
        ),
        Rule::new("small", Style::new().font_size(Length::percent(80.0))),
        Rule::new(
            "sub,sup",
            Style::new()
                .font_size(Length::percent(75.0))
                .line_height(SIZE_0)
                .position(Position::Relative)
                .vertical_align(VerticalAlign::Baseline),
        ),
        Rule::new("sub", Style::new().bottom(Length::em(-0.25))),
        Rule::new("sup", Style::new().top(Length::em(-0.5))),
        Rule::new(
            "table",
            Style::new()
                .border_collapse(BorderCollapse::Collapse)
                .border_color(Color::Inherit)
                .text_indent(SIZE_0),
        ),
        Rule::new(
            "button,input,optgroup,select,textarea,::file-selector-button",
            Style::new()
                .background_color(Color::Transparent)
                .color(Color::Inherit)
                .inherit(PropertySlot::FontFamily)
                .font_size(Length::inherit()),
        )
        .custom_prop("letter-spacing", "inherit"),
        Rule::new(
            "input:where(:not([type='button'],[type='reset'],[type='submit'])),select,textarea",
            Style::new().border(Border::new().width(Length::px(1.0)).style(BorderStyle::Solid)),
        ),
        Rule::new(
            "button,input:where([type='button'],[type='reset'],[type='submit']),::file-selector-button",
            Style::new().appearance(Appearance::Button),
        ),
        Rule::bare(":-moz-focusring").custom_prop("outline", "auto"),
        Rule::bare(":-moz-ui-invalid").custom_prop("box-shadow", "none"),
        Rule::new("progress", Style::new().vertical_align(VerticalAlign::Baseline)),
        Rule::new(
            "::-webkit-inner-spin-button,::-webkit-outer-spin-button",
            Style::new().height(AUTO),
        ),
        Rule::bare("::-webkit-search-decoration").custom_prop("-webkit-appearance", "none"),
        Rule::new("summary", Style::new().display(Display::ListItem)),
        Rule::new(
            "ol,ul,menu",
            Style::new()
                .list_style_type(ListStyleType::None)
                .list_style_position(ListStylePosition::Inside),
        ),
        Rule::bare("textarea").custom_prop("resize", "vertical"),
        Rule::new(
            "::placeholder",
            Style::new()
                .color(Color::function(
                    "color-mix(in srgb, currentColor 50%, transparent)",
                ))
                .opacity(1.0),
        ),
        Rule::new(":disabled", Style::new().cursor(Cursor::Default)),
        Rule::new(
            "img,svg,video,canvas,audio,iframe,embed,object",
            Style::new()
                .display(Display::Block)
                .vertical_align(VerticalAlign::Middle),
        ),
        Rule::new("img,video", Style::new().height(AUTO).max_width(FULL)),
        Rule::new(
            "[hidden]",
            Style::new().set(PropertySlot::Display, Value::raw("none !important")),
        ),
    ]
    .into_iter()
    .collect()
}
