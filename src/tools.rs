// SPDX-License-Identifier: MIT
//
// Tool catalog — the eight palette operations the server exposes.
//
// Each tool has a name, a one-line description, a JSON Schema for its
// arguments, and a handler. Handlers deserialize their arguments into a
// typed struct (camelCase field names, schema defaults filled in by
// serde), validate what serde cannot express (hex shape, ranges), run
// the palette engine, and return the text body of the tool result.
//
// A handler never panics on bad input: every failure is a `ToolError`,
// which the server turns into an `isError` result rather than a
// protocol error.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{SecondsFormat, Utc};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::debug;

use tint_color::extract::extract_colors_from_css;
use tint_color::{ColorError, Rgb};
use tint_export::{Component, ExportError, OutputFormat, export, export_colors, preview_html};
use tint_palette::{
    AccessibilityCheck, BasePalette, ColorScale, ProjectColors, ProjectType, Scheme, Style, WcagLevel,
    generate_dynamic_colors, generate_project_colors, suggest_secondary_color, validate_accessibility,
    validate_palette_accessibility,
};

/// Hex shape accepted for color arguments.
static HEX_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^#[0-9A-Fa-f]{3,6}$").expect("valid hex argument regex"));

/// Bounds for `generate_dynamic_colors.maxColors`.
const MAX_COLORS_RANGE: std::ops::RangeInclusive<f64> = 1.0..=30.0;
const DEFAULT_MAX_COLORS: f64 = 15.0;
const MIN_DESCRIPTION_CHARS: usize = 5;

// ─── Errors ─────────────────────────────────────────────────────────────────

/// Why a tool call failed.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid arguments: {0}")]
    InvalidArgument(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("no valid colors found in the CSS content")]
    NoColorsFound,
}

// ─── Catalog ────────────────────────────────────────────────────────────────

/// A tool's public description.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

type Handler = fn(Value) -> Result<String, ToolError>;

struct Tool {
    name: &'static str,
    description: &'static str,
    schema: fn() -> Value,
    handler: Handler,
}

const TOOLS: &[Tool] = &[
    Tool {
        name: "generate_palette",
        description: "Generate a full palette from a brand color: 50-900 scales for primary, neutral and status colors, with an accessibility audit and an export.",
        schema: generate_palette_schema,
        handler: generate_palette,
    },
    Tool {
        name: "extend_palette_for_project",
        description: "Generate a palette plus role colors for a project type (ecommerce, dashboard, webrtc, blog, custom).",
        schema: extend_palette_schema,
        handler: extend_palette_for_project,
    },
    Tool {
        name: "validate_accessibility",
        description: "Check the WCAG contrast of a foreground/background pair and suggest a corrected foreground when it fails.",
        schema: validate_accessibility_schema,
        handler: validate_pair,
    },
    Tool {
        name: "generate_color_scale",
        description: "Generate a single 10-step color scale from a seed color.",
        schema: color_scale_schema,
        handler: generate_color_scale,
    },
    Tool {
        name: "suggest_secondary_color",
        description: "Suggest a secondary color by rotating the seed around the color wheel.",
        schema: secondary_color_schema,
        handler: suggest_secondary,
    },
    Tool {
        name: "import_existing_colors",
        description: "Extract hex colors from existing CSS and rebuild them as a modern palette.",
        schema: import_colors_schema,
        handler: import_existing_colors,
    },
    Tool {
        name: "preview_palette",
        description: "Render an HTML page showing the palette applied to sample UI components.",
        schema: preview_palette_schema,
        handler: preview_palette,
    },
    Tool {
        name: "generate_dynamic_colors",
        description: "Infer named color variables from a natural-language project description.",
        schema: dynamic_colors_schema,
        handler: generate_dynamic,
    },
];

/// Every tool, in catalog order.
#[must_use]
pub fn list() -> Vec<ToolInfo> {
    TOOLS
        .iter()
        .map(|t| ToolInfo {
            name: t.name,
            description: t.description,
            input_schema: (t.schema)(),
        })
        .collect()
}

/// Run tool `name` with `arguments` (`null` is treated as `{}`).
///
/// # Errors
///
/// [`ToolError::UnknownTool`] for an unlisted name; otherwise whatever
/// the tool's handler reports.
pub fn call(name: &str, arguments: Value) -> Result<String, ToolError> {
    let tool = TOOLS
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| ToolError::UnknownTool(name.to_owned()))?;
    let arguments = if arguments.is_null() { json!({}) } else { arguments };
    debug!(tool = name, "calling tool");
    (tool.handler)(arguments)
}

// ─── Schemas ────────────────────────────────────────────────────────────────

fn hex_schema(description: &str) -> Value {
    json!({ "type": "string", "pattern": "^#[0-9A-Fa-f]{3,6}$", "description": description })
}

fn style_schema() -> Value {
    json!({ "type": "string", "enum": ["modern", "vibrant", "muted", "minimal"], "default": "modern" })
}

fn format_schema() -> Value {
    json!({
        "type": "string",
        "enum": ["css", "tailwind", "scss", "figma", "react-native"],
        "default": "css",
    })
}

fn generate_palette_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "brandColor": hex_schema("Brand color as #rgb or #rrggbb"),
            "style": style_schema(),
            "format": format_schema(),
        },
        "required": ["brandColor"],
    })
}

fn extend_palette_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "projectType": {
                "type": "string",
                "enum": ["ecommerce", "dashboard", "webrtc", "blog", "custom"],
            },
            "primaryColor": hex_schema("Primary color as #rgb or #rrggbb"),
            "style": style_schema(),
            "customNeeds": { "type": "array", "items": { "type": "string" } },
            "format": format_schema(),
        },
        "required": ["projectType", "primaryColor"],
    })
}

fn validate_accessibility_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "foreground": hex_schema("Text color"),
            "background": hex_schema("Background color"),
            "level": { "type": "string", "enum": ["AA", "AAA"], "default": "AA" },
            "isLargeText": { "type": "boolean", "default": false },
        },
        "required": ["foreground", "background"],
    })
}

fn color_scale_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "seedColor": hex_schema("Seed color for step 500's hue and saturation"),
            "style": style_schema(),
        },
        "required": ["seedColor"],
    })
}

fn secondary_color_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "seedColor": hex_schema("Color to rotate"),
            "scheme": {
                "type": "string",
                "enum": ["analogous", "complementary", "triadic"],
                "default": "analogous",
            },
        },
        "required": ["seedColor"],
    })
}

fn import_colors_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "cssContent": { "type": "string", "description": "Stylesheet text to scan for hex colors" },
            "format": format_schema(),
        },
        "required": ["cssContent"],
    })
}

fn preview_palette_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "primaryColor": hex_schema("Primary color as #rgb or #rrggbb"),
            "style": style_schema(),
            "components": {
                "type": "array",
                "items": { "type": "string", "enum": ["button", "card", "form", "navigation", "all"] },
                "default": ["button", "card"],
            },
        },
        "required": ["primaryColor"],
    })
}

fn dynamic_colors_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "projectDescription": { "type": "string", "minLength": MIN_DESCRIPTION_CHARS },
            "primaryColor": hex_schema("Primary color as #rgb or #rrggbb"),
            "maxColors": {
                "type": "number",
                "minimum": MAX_COLORS_RANGE.start(),
                "maximum": MAX_COLORS_RANGE.end(),
                "default": DEFAULT_MAX_COLORS,
            },
            "format": format_schema(),
        },
        "required": ["projectDescription", "primaryColor"],
    })
}

// ─── Argument helpers ───────────────────────────────────────────────────────

fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArgument(e.to_string()))
}

/// Check `value` against the hex argument shape, then decode it.
fn hex_arg(field: &str, value: &str) -> Result<Rgb, ToolError> {
    if !HEX_ARG.is_match(value) {
        return Err(ToolError::InvalidArgument(format!(
            "{field}: valid hex color required, got {value:?}"
        )));
    }
    Ok(Rgb::from_hex(value)?)
}

fn pretty<T: Serialize>(value: &T) -> Result<String, ToolError> {
    serde_json::to_string_pretty(value).map_err(|e| ToolError::Export(e.into()))
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn default_components() -> Vec<Component> {
    Component::DEFAULT.to_vec()
}

const fn default_max_colors() -> f64 {
    DEFAULT_MAX_COLORS
}

// ─── Results ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata {
    generated_at: String,
    style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_type: Option<ProjectType>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteResult<'a> {
    palette: &'a BasePalette,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_colors: Option<&'a ProjectColors>,
    accessibility: BTreeMap<&'static str, AccessibilityCheck>,
    exports: BTreeMap<&'static str, String>,
    metadata: Metadata,
}

impl<'a> PaletteResult<'a> {
    fn build(
        palette: &'a BasePalette,
        project: Option<(ProjectType, &'a ProjectColors)>,
        style: Style,
        format: OutputFormat,
    ) -> Result<Self, ToolError> {
        let empty = ProjectColors::new();
        let extras = project.map_or(&empty, |(_, colors)| colors);
        let rendered = export(format, palette, extras)?;
        Ok(Self {
            palette,
            project_colors: project.map(|(_, colors)| colors),
            accessibility: validate_palette_accessibility(palette),
            exports: BTreeMap::from([(format.name(), rendered)]),
            metadata: Metadata {
                generated_at: timestamp(),
                style,
                project_type: project.map(|(t, _)| t),
            },
        })
    }
}

// ─── Handlers ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratePaletteArgs {
    brand_color: String,
    #[serde(default)]
    style: Style,
    #[serde(default)]
    format: OutputFormat,
}

fn generate_palette(arguments: Value) -> Result<String, ToolError> {
    let args: GeneratePaletteArgs = parse_args(arguments)?;
    let brand = hex_arg("brandColor", &args.brand_color)?;
    let palette = BasePalette::from_seed(brand, args.style);
    let result = PaletteResult::build(&palette, None, args.style, args.format)?;
    Ok(format!(
        "Generated a {} palette from {brand}.\n\n{}",
        args.style.name(),
        pretty(&result)?
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtendPaletteArgs {
    project_type: ProjectType,
    primary_color: String,
    #[serde(default)]
    style: Style,
    #[serde(default)]
    custom_needs: Vec<String>,
    #[serde(default)]
    format: OutputFormat,
}

fn extend_palette_for_project(arguments: Value) -> Result<String, ToolError> {
    let args: ExtendPaletteArgs = parse_args(arguments)?;
    let primary = hex_arg("primaryColor", &args.primary_color)?;
    let palette = BasePalette::from_seed(primary, args.style);
    let colors = generate_project_colors(args.project_type, primary, &args.custom_needs);
    let result =
        PaletteResult::build(&palette, Some((args.project_type, &colors)), args.style, args.format)?;
    Ok(format!(
        "Extended the palette with {} {} colors.\n\n{}",
        colors.len(),
        args.project_type,
        pretty(&result)?
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateAccessibilityArgs {
    foreground: String,
    background: String,
    #[serde(default)]
    level: WcagLevel,
    #[serde(default)]
    is_large_text: bool,
}

fn validate_pair(arguments: Value) -> Result<String, ToolError> {
    let args: ValidateAccessibilityArgs = parse_args(arguments)?;
    let fg = hex_arg("foreground", &args.foreground)?;
    let bg = hex_arg("background", &args.background)?;
    let check = validate_accessibility(fg, bg, args.level, args.is_large_text);
    Ok(format!("Accessibility check ({}):\n\n{}", args.level, pretty(&check)?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColorScaleArgs {
    seed_color: String,
    #[serde(default)]
    style: Style,
}

fn generate_color_scale(arguments: Value) -> Result<String, ToolError> {
    let args: ColorScaleArgs = parse_args(arguments)?;
    let seed = hex_arg("seedColor", &args.seed_color)?;
    let scale = ColorScale::from_seed(seed, args.style);
    Ok(format!(
        "Generated a {} scale from {seed}.\n\n{}",
        args.style.name(),
        pretty(&scale)?
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecondaryColorArgs {
    seed_color: String,
    #[serde(default)]
    scheme: Scheme,
}

fn suggest_secondary(arguments: Value) -> Result<String, ToolError> {
    let args: SecondaryColorArgs = parse_args(arguments)?;
    let seed = hex_arg("seedColor", &args.seed_color)?;
    let secondary = suggest_secondary_color(&args.seed_color, args.scheme)?;
    pretty(&json!({
        "seedColor": seed,
        "scheme": args.scheme,
        "secondaryColor": secondary,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportColorsArgs {
    css_content: String,
    #[serde(default)]
    format: OutputFormat,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImportResult {
    extracted_colors: Vec<Rgb>,
    primary_color_used: Rgb,
    modernized_palette: BasePalette,
    exports: BTreeMap<&'static str, String>,
}

fn import_existing_colors(arguments: Value) -> Result<String, ToolError> {
    let args: ImportColorsArgs = parse_args(arguments)?;
    let extracted = extract_colors_from_css(&args.css_content);
    let &primary = extracted.first().ok_or(ToolError::NoColorsFound)?;
    let palette = BasePalette::from_seed(primary, Style::Modern);
    let rendered = export(args.format, &palette, &ProjectColors::new())?;
    let result = ImportResult {
        primary_color_used: primary,
        modernized_palette: palette,
        exports: BTreeMap::from([(args.format.name(), rendered)]),
        extracted_colors: extracted,
    };
    Ok(format!(
        "Extracted {} colors and rebuilt them as a modern palette.\n\n{}",
        result.extracted_colors.len(),
        pretty(&result)?
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PreviewPaletteArgs {
    primary_color: String,
    #[serde(default)]
    style: Style,
    #[serde(default = "default_components")]
    components: Vec<Component>,
}

fn preview_palette(arguments: Value) -> Result<String, ToolError> {
    let args: PreviewPaletteArgs = parse_args(arguments)?;
    let primary = hex_arg("primaryColor", &args.primary_color)?;
    let palette = BasePalette::from_seed(primary, args.style);
    Ok(format!("Palette preview:\n\n{}", preview_html(&palette, &args.components)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DynamicColorsArgs {
    project_description: String,
    primary_color: String,
    #[serde(default = "default_max_colors")]
    max_colors: f64,
    #[serde(default)]
    format: OutputFormat,
}

fn generate_dynamic(arguments: Value) -> Result<String, ToolError> {
    let args: DynamicColorsArgs = parse_args(arguments)?;
    if args.project_description.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(ToolError::InvalidArgument(format!(
            "projectDescription must be at least {MIN_DESCRIPTION_CHARS} characters"
        )));
    }
    if !MAX_COLORS_RANGE.contains(&args.max_colors) {
        return Err(ToolError::InvalidArgument(format!(
            "maxColors must be between {} and {}, got {}",
            MAX_COLORS_RANGE.start(),
            MAX_COLORS_RANGE.end(),
            args.max_colors
        )));
    }
    let primary = hex_arg("primaryColor", &args.primary_color)?;
    // In 1..=30 after the range check; a fractional cap admits one more color.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let max_colors = args.max_colors.ceil() as usize;

    let colors = generate_dynamic_colors(&args.project_description, primary, max_colors);
    let rendered = export_colors(args.format, &colors)?;
    Ok(format!(
        "Inferred {} colors from \"{}\".\n\n{rendered}",
        colors.len(),
        args.project_description
    ))
}

// ─── Tests ──────────────────────────────────────────────────────────────────
