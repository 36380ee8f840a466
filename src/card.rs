use serde::Deserialize;

use crate::date::format_date;
use crate::resolver::Resolution;

const START_Y: i32 = 40;
const LINE_HEIGHT: i32 = 24;
const LEFT_PADDING: i32 = 24;
const EMOJI_SIZE: i32 = 64;
const CHAR_WIDTH: f32 = 9.6;
const MIN_ROW_CHARS: usize = 36;
const RIGHT_PADDING: f32 = 24.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
    pub sign: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
                sign: "#58a6ff",
            },
            Theme::Light => ThemeColors {
                bg: "#eff6ff",
                text: "#1f2937",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
                sign: "#2563eb",
            },
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Splits a row into `(key, dots, value)` so the values line up at `align_width`.
pub fn build_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => String::new(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    (key_part, dots, value.to_string())
}

/// Renders a standalone SVG card for a successful resolution.
///
/// `caption` is the heading line, usually [`Submission::caption`](crate::form::Submission::caption).
pub fn render_card(resolution: &Resolution, caption: &str, theme: Theme) -> String {
    let colors = theme.colors();
    let zodiac = resolution.zodiac;

    let lunar_value = resolution.lunar_year.to_string();
    let date_value = format_date(resolution.reference_date);
    let rows = [
        ("Animal", zodiac.name()),
        ("Lunar year", lunar_value.as_str()),
        ("Reference date", date_value.as_str()),
    ];

    let align_width = rows
        .iter()
        .map(|(k, v)| k.len() + 2 + v.len())
        .max()
        .unwrap_or(0)
        .max(MIN_ROW_CHARS);

    let hero_y = START_Y + LINE_HEIGHT + EMOJI_SIZE;
    let sign_x = LEFT_PADDING + EMOJI_SIZE + 16;

    let mut row_tspans = String::new();
    for (i, (key, value)) in rows.iter().enumerate() {
        let y = hero_y + LINE_HEIGHT * (i as i32 + 2);
        let (k, d, v) = build_row(key, value, align_width);
        row_tspans.push_str(&format!(
            r#"<tspan x="{LEFT_PADDING}" y="{y}" class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="value">{}</tspan>
"#,
            escape_xml(&k),
            escape_xml(&d),
            escape_xml(&v)
        ));
    }

    let caption_chars = caption.chars().count() * 2;
    let w = LEFT_PADDING as f32
        + (align_width.max(caption_chars) as f32) * CHAR_WIDTH
        + RIGHT_PADDING;
    let h = hero_y + LINE_HEIGHT * (rows.len() as i32 + 2);

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key   {{ fill: {key}; }}
.value {{ fill: {value}; }}
.cc    {{ fill: {cc}; }}
.sign  {{ fill: {sign}; font-weight: bold; font-size: 48px; }}
.emoji {{ font-size: {EMOJI_SIZE}px; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="24"/>

<text fill="{text}" x="{LEFT_PADDING}" y="{START_Y}" font-size="20px">{caption}</text>
<text class="emoji" x="{LEFT_PADDING}" y="{hero_y}">{emoji}</text>
<text class="sign" x="{sign_x}" y="{hero_y}">{sign_text}</text>

<text fill="{text}">
{rows}</text>

</svg>
"#,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        sign = colors.sign,
        caption = escape_xml(caption),
        emoji = zodiac.emoji(),
        sign_text = zodiac.sign(),
        rows = row_tspans,
    )
}
