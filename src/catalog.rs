//! Template catalog: the fixed set of Vite templates the wizard offers.
//!
//! Pure data plus a pure formatter for `vite-picker list`.
//! Categories are the top-level menu; variants are the selectable leaves
//! whose identifier is handed to `npm create vite -- --template`.

use serde::Serialize;

use crate::types::OutputFormat;

// ============================================================================
// TYPES
// ============================================================================

/// A concrete selectable template (one language flavor of a category).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// Display label, e.g. "Typescript".
    pub language: &'static str,
    /// Opaque identifier passed to the generator, e.g. "react-ts".
    pub identifier: &'static str,
}

/// A top-level catalog grouping (a framework family).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub variants: &'static [Variant],
    pub description: &'static str,
}

impl Category {
    /// Description, if there is anything to show.
    pub fn description(&self) -> Option<&'static str> {
        if self.description.trim().is_empty() {
            None
        } else {
            Some(self.description)
        }
    }
}

/// Both language flavors of a template family.
macro_rules! js_ts {
    ($js:literal, $ts:literal) => {
        &[
            Variant { language: "Javascript", identifier: $js },
            Variant { language: "Typescript", identifier: $ts },
        ]
    };
}

// ============================================================================
// CATALOG
// ============================================================================

/// Templates supported by `create-vite`, in menu order.
pub static VITE_TEMPLATES: &[Category] = &[
    Category {
        name: "svelte",
        variants: js_ts!("svelte", "svelte-ts"),
        description: "Svelte is a radical new approach to building user interfaces. \
            Whereas traditional frameworks like React and Vue do the bulk of their work in the browser, \
            Svelte shifts that work into a compile step that happens when you build your app.",
    },
    Category {
        name: "react",
        variants: js_ts!("react", "react-ts"),
        description: "React is a JavaScript library for building user interfaces. \
            It is maintained by Facebook and a community of individual developers and companies.",
    },
    Category {
        name: "vue",
        variants: js_ts!("vue", "vue-ts"),
        description: "Vue.js is a progressive framework for building user interfaces. \
            It is designed from the ground up to be incrementally adoptable.",
    },
    Category {
        name: "preact",
        variants: js_ts!("preact", "preact-ts"),
        description: "Preact is a fast 3kB alternative to React with the same modern API. \
            It provides the thinnest possible Virtual DOM abstraction on top of the DOM.",
    },
    Category {
        name: "solid",
        variants: js_ts!("solid", "solid-ts"),
        description: "Solid is a declarative JavaScript library for creating user interfaces. \
            It does not use a virtual DOM. Instead, it uses fine-grained reactivity \
            to only update the parts of the DOM that need to change.",
    },
    Category {
        name: "lit",
        variants: js_ts!("lit", "lit-ts"),
        description: "Lit is a simple library for building fast, lightweight web components. \
            It is built on top of the Web Components standard, \
            and is designed to work with all modern web browsers.",
    },
    Category {
        name: "vanilla",
        variants: js_ts!("vanilla", "vanilla-ts"),
        description: "Vanilla is a simple and minimalistic starter template for Vite. \
            It is a great starting point for building your own custom framework or library.",
    },
    Category {
        name: "react-swc",
        variants: js_ts!("react-swc", "react-swc-ts"),
        description: "React SWC is a template that uses SWC for transforming your React code. \
            SWC is a super-fast JavaScript/TypeScript compiler written in Rust. \
            It is a drop-in replacement for Babel.",
    },
    Category {
        name: "qwik",
        variants: js_ts!("qwik", "qwik-ts"),
        description: "Qwik is a modern web framework that is designed to be fast, small, and easy to use. \
            It is built on top of the Web Components standard, \
            and is designed to work with all modern web browsers.",
    },
];

// ============================================================================
// FORMATTING
// ============================================================================

/// Format the catalog for `vite-picker list`.
///
/// Pure function: takes data, returns formatted string.
pub fn format_catalog(catalog: &[Category], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(catalog),
        OutputFormat::Json => format_json(catalog),
    }
}

fn format_human(catalog: &[Category]) -> String {
    let mut out = String::new();

    for category in catalog {
        out.push_str(&format!("=== {} ===\n", category.name));
        for variant in category.variants {
            out.push_str(&format!("  {:<12} {}\n", variant.language, variant.identifier));
        }
        if let Some(description) = category.description() {
            for line in textwrap::wrap(description, 72) {
                out.push_str(&format!("  {}\n", line));
            }
        }
        out.push('\n');
    }

    out
}

fn format_json(catalog: &[Category]) -> String {
    // Static &str data always serializes
    serde_json::to_string_pretty(catalog).unwrap_or_else(|_| "[]".to_string())
}

// ============================================================================
// TESTS
// ============================================================================
