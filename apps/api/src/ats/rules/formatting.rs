//! Formatting rules. Each reads one field of `LayoutConfiguration` and skips when the
//! upstream extractor could not determine it.

use crate::ats::rules::{Outcome, RuleContext};

pub const STANDARD_FONTS: &[&str] = &[
    "arial",
    "book antiqua",
    "calibri",
    "cambria",
    "garamond",
    "georgia",
    "helvetica",
    "tahoma",
    "times new roman",
    "trebuchet ms",
    "verdana",
];

const FONT_SIZE_RANGE_PT: (f32, f32) = (10.0, 12.0);
const MARGIN_RANGE_IN: (f32, f32) = (0.5, 1.25);

pub fn single_column(ctx: &RuleContext<'_>) -> Outcome {
    match ctx.document.configuration.columns {
        Some(columns) => Outcome::fail_if(columns > 1),
        None => Outcome::Skip,
    }
}

pub fn standard_font(ctx: &RuleContext<'_>) -> Outcome {
    match ctx.document.configuration.font_family.as_deref() {
        Some(font) if !font.trim().is_empty() => {
            let font = font.trim().to_lowercase();
            Outcome::fail_if(!STANDARD_FONTS.contains(&font.as_str()))
        }
        _ => Outcome::Skip,
    }
}

pub fn font_size(ctx: &RuleContext<'_>) -> Outcome {
    let (min, max) = FONT_SIZE_RANGE_PT;
    match ctx.document.configuration.font_size {
        Some(size) => Outcome::fail_if(!(min..=max).contains(&size)),
        None => Outcome::Skip,
    }
}

pub fn margins(ctx: &RuleContext<'_>) -> Outcome {
    let (min, max) = MARGIN_RANGE_IN;
    match ctx.document.configuration.margins {
        Some(margins) => Outcome::fail_if(margins.all().iter().any(|m| !(min..=max).contains(m))),
        None => Outcome::Skip,
    }
}

pub fn no_images(ctx: &RuleContext<'_>) -> Outcome {
    flag(ctx.document.configuration.has_images)
}

pub fn no_tables(ctx: &RuleContext<'_>) -> Outcome {
    flag(ctx.document.configuration.has_tables)
}

pub fn no_headers_footers(ctx: &RuleContext<'_>) -> Outcome {
    flag(ctx.document.configuration.has_headers_footers)
}

pub fn file_size(ctx: &RuleContext<'_>) -> Outcome {
    match ctx.document.configuration.file_size_bytes {
        Some(bytes) => Outcome::fail_if(bytes > ctx.settings.max_file_size_bytes),
        None => Outcome::Skip,
    }
}

fn flag(present: Option<bool>) -> Outcome {
    match present {
        Some(present) => Outcome::fail_if(present),
        None => Outcome::Skip,
    }
}
