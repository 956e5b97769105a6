//! The BBCode tag catalogue.
//!
//! Dialogue text may embed the RichTextLabel BBCode subset plus a few tags
//! the dialogue runtime itself understands (`wait`, `speed`, `next`). This
//! module is the single source of truth for which tags exist, what
//! parameters they take, and how they are documented in completion and
//! hover responses.
//!
//! The catalogue is plain static data in three groups. Lookup order is
//! always built-ins, then dialogue tags, then effect tags.

/// One parameter accepted by a tag, e.g. `amp` in `[wave amp=50]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagParameter {
    pub name: &'static str,
    pub description: &'static str,
    pub optional: bool,
}

/// A single BBCode tag descriptor.
///
/// `self_closing` tags never require a matching `[/name]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBCodeTag {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [TagParameter],
    pub example: Option<&'static str>,
    pub self_closing: bool,
}

/// Built-in RichTextLabel formatting tags.
pub static BUILTIN_TAGS: &[BBCodeTag] = &[
    BBCodeTag {
        name: "b",
        description: "Makes text use the bold (or bold italics) font of RichTextLabel.",
        parameters: &[],
        example: Some("[b]This is bold text[/b]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "i",
        description: "Makes text use the italics (or bold italics) font of RichTextLabel.",
        parameters: &[],
        example: Some("[i]This is italic text[/i]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "u",
        description: "Makes text underlined.",
        parameters: &[],
        example: Some("[u]This is underlined text[/u]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "s",
        description: "Makes text strikethrough.",
        parameters: &[],
        example: Some("[s]This is strikethrough text[/s]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "center",
        description: "Makes text horizontally centered. Same as [p align=center].",
        parameters: &[],
        example: Some("[center]This text is centered[/center]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "left",
        description: "Makes text horizontally left-aligned. Same as [p align=left].",
        parameters: &[],
        example: Some("[left]This text is left-aligned[/left]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "right",
        description: "Makes text horizontally right-aligned. Same as [p align=right].",
        parameters: &[],
        example: Some("[right]This text is right-aligned[/right]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "fill",
        description: "Makes text fill the full width of RichTextLabel. Same as [p align=fill].",
        parameters: &[],
        example: Some("[fill]This text fills its container[/fill]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "indent",
        description: "Indents text once. The indentation width is the same as with [ul] or [ol], but without a bullet point.",
        parameters: &[],
        example: Some("[indent]This text is indented[/indent]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "url",
        description: "Creates a hyperlink (underlined and clickable text). Must be handled with the \"meta_clicked\" signal to have an effect.",
        parameters: &[TagParameter {
            name: "url",
            description: "The URL to link to",
            optional: true,
        }],
        example: Some("[url=https://example.com]Link text[/url]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "hint",
        description: "Creates a tooltip hint that is displayed when hovering the text with the mouse.",
        parameters: &[TagParameter {
            name: "text",
            description: "The tooltip text to display on hover. Recommended to put between quotes.",
            optional: false,
        }],
        example: Some("[hint=\"Tooltip text displayed on hover\"]Text with tooltip[/hint]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "color",
        description: "Changes the color of text. Color must be provided by a common name or using the HEX format (e.g. #ff00ff).",
        parameters: &[TagParameter {
            name: "color",
            description: "Color name or color in HEX format",
            optional: false,
        }],
        example: Some("[color=red]This is red text[/color]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "bgcolor",
        description: "Draws the color behind text. This can be used to highlight text.",
        parameters: &[TagParameter {
            name: "color",
            description: "Color name or color in HEX format",
            optional: false,
        }],
        example: Some("[bgcolor=yellow]This is highlighted text[/bgcolor]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "fgcolor",
        description: "Draws the color in front of text. This can be used to \"redact\" text.",
        parameters: &[TagParameter {
            name: "color",
            description: "Color name or color in HEX format",
            optional: false,
        }],
        example: Some("[fgcolor=black]This is redacted text[/fgcolor]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "font",
        description: "Makes text use a font resource from the specified path.",
        parameters: &[TagParameter {
            name: "name",
            description: "A valid Font resource path",
            optional: false,
        }],
        example: Some("[font=path/to/font.ttf]Text in different font[/font]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "font_size",
        description: "Use custom font size for text.",
        parameters: &[TagParameter {
            name: "size",
            description: "Font size in pixels",
            optional: false,
        }],
        example: Some("[font_size=24]Larger text[/font_size]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "opentype_features",
        description: "Enables custom OpenType font features for text.",
        parameters: &[TagParameter {
            name: "features",
            description: "Comma-separated list of OpenType feature tags",
            optional: false,
        }],
        example: Some("[opentype_features=calt=0,zero=1]Text with OpenType features[/opentype_features]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "table",
        description: "Creates a table with the specified number of columns.",
        parameters: &[
            TagParameter {
                name: "columns",
                description: "Number of columns",
                optional: false,
            },
            TagParameter {
                name: "valign",
                description: "Vertical alignment (top/center/bottom/baseline)",
                optional: true,
            },
        ],
        example: Some("[table=2]\n[cell]Col1[/cell][cell]Col2[/cell]\n[/table]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "cell",
        description: "Defines a table cell.",
        parameters: &[TagParameter {
            name: "ratio",
            description: "Cell expansion ratio",
            optional: true,
        }],
        example: Some("[cell]Cell content[/cell]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "ul",
        description: "Adds an unordered list.",
        parameters: &[TagParameter {
            name: "bullet",
            description: "Custom bullet point character",
            optional: true,
        }],
        example: Some("[ul]\nItem 1\nItem 2\n[/ul]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "ol",
        description: "Adds an ordered (numbered) list.",
        parameters: &[TagParameter {
            name: "type",
            description: "1 for numbers, a/A for letters, i/I for Roman numerals",
            optional: true,
        }],
        example: Some("[ol type=1]\nItem 1\nItem 2\n[/ol]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "p",
        description: "Adds new paragraph with text.",
        parameters: &[TagParameter {
            name: "align",
            description: "left/l, center/c, right/r, fill/f",
            optional: true,
        }],
        example: Some("[p align=center]Centered paragraph[/p]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "code",
        description: "Makes text use the mono font of RichTextLabel.",
        parameters: &[],
        example: Some("[code]Monospace text[/code]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "br",
        description: "Adds line break in text, without adding a new paragraph.",
        parameters: &[],
        example: Some("Line 1[br]Line 2"),
        self_closing: true,
    },
    BBCodeTag {
        name: "lb",
        description: "Adds [. Used to escape BBCode markup.",
        parameters: &[],
        example: Some("[lb]b[rb]text[lb]/b[rb] will display as [b]text[/b]"),
        self_closing: true,
    },
    BBCodeTag {
        name: "rb",
        description: "Adds ]. Used to escape BBCode markup.",
        parameters: &[],
        example: Some("[lb]b[rb]text[lb]/b[rb] will display as [b]text[/b]"),
        self_closing: true,
    },
    BBCodeTag {
        name: "hr",
        description: "Adds a horizontal rule to separate content.",
        parameters: &[
            TagParameter {
                name: "color",
                description: "Color name or color in HEX format",
                optional: true,
            },
            TagParameter {
                name: "height",
                description: "Height in pixels",
                optional: true,
            },
            TagParameter {
                name: "width",
                description: "Width in pixels or percentage",
                optional: true,
            },
        ],
        example: Some("[hr color=red width=50%]"),
        self_closing: true,
    },
];

/// Tags the dialogue runtime interprets while typing out a line.
pub static DIALOGUE_TAGS: &[BBCodeTag] = &[
    BBCodeTag {
        name: "wait",
        description: "Pauses typing of dialogue.",
        parameters: &[TagParameter {
            name: "duration",
            description: "Either:\n- A number of seconds to wait\n- An input action name in quotes (e.g. \"ui_accept\")\n- An array of action names (e.g. [\"ui_accept\",\"ui_cancel\"])\n- No value to wait for any action",
            optional: true,
        }],
        example: Some("Hello[wait=1.0]... world!\nPress any key to continue[wait]\nPress accept[wait=\"ui_accept\"]\nPress accept or cancel[wait=[\"ui_accept\",\"ui_cancel\"]]"),
        self_closing: true,
    },
    BBCodeTag {
        name: "speed",
        description: "Changes the typing speed by multiplying the default speed.",
        parameters: &[TagParameter {
            name: "multiplier",
            description: "Number to multiply the default typing speed by (e.g. 0.5 for half speed, 2.0 for double speed)",
            optional: false,
        }],
        example: Some("[speed=0.5]Slow text \n[speed=2.0]Fast text"),
        self_closing: true,
    },
    BBCodeTag {
        name: "next",
        description: "Controls automatic continuation to the next line of dialogue.",
        parameters: &[TagParameter {
            name: "duration",
            description: "Either:\n- A number of seconds to wait before continuing\n- \"auto\" to wait based on text length",
            optional: true,
        }],
        example: Some("This line will wait 2 seconds[next=2]\nThis line will wait based on length[next=auto]\nThis line immediately advance at the end[next=0]"),
        self_closing: true,
    },
];

/// Animated text effect tags.
pub static EFFECT_TAGS: &[BBCodeTag] = &[
    BBCodeTag {
        name: "wave",
        description: "Makes the text go up and down.",
        parameters: &[
            TagParameter {
                name: "amp",
                description: "Controls how high and low the effect goes",
                optional: true,
            },
            TagParameter {
                name: "freq",
                description: "Controls how fast the text goes up and down",
                optional: true,
            },
            TagParameter {
                name: "connected",
                description: "If 1, glyphs with ligatures move together. If 0, each glyph moves individually",
                optional: true,
            },
        ],
        example: Some("[wave amp=50.0 freq=5.0]Wavy text[/wave]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "tornado",
        description: "Makes the text move around in a circle.",
        parameters: &[
            TagParameter {
                name: "radius",
                description: "Radius of the circle that controls the offset",
                optional: true,
            },
            TagParameter {
                name: "freq",
                description: "How fast the text moves in a circle",
                optional: true,
            },
            TagParameter {
                name: "connected",
                description: "If 1, glyphs with ligatures move together. If 0, each glyph moves individually",
                optional: true,
            },
        ],
        example: Some("[tornado radius=10.0 freq=1.0]Spinning text[/tornado]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "shake",
        description: "Makes the text shake.",
        parameters: &[
            TagParameter {
                name: "rate",
                description: "Controls how fast the text shakes",
                optional: true,
            },
            TagParameter {
                name: "level",
                description: "Controls how far the text is offset from the origin",
                optional: true,
            },
            TagParameter {
                name: "connected",
                description: "If 1, glyphs with ligatures move together. If 0, each glyph moves individually",
                optional: true,
            },
        ],
        example: Some("[shake rate=20.0 level=5]Shaking text[/shake]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "pulse",
        description: "Creates an animated pulsing effect that multiplies each character's opacity and color.",
        parameters: &[
            TagParameter {
                name: "freq",
                description: "Controls the frequency of the half-pulsing cycle",
                optional: true,
            },
            TagParameter {
                name: "color",
                description: "Target color multiplier for blinking",
                optional: true,
            },
            TagParameter {
                name: "ease",
                description: "Easing function exponent to use. Negative values provide in-out easing",
                optional: true,
            },
        ],
        example: Some("[pulse freq=1.0 color=#ffffff40]Pulsing text[/pulse]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "rainbow",
        description: "Gives the text a rainbow color that changes over time.",
        parameters: &[
            TagParameter {
                name: "freq",
                description: "How many letters the rainbow extends over before repeating",
                optional: true,
            },
            TagParameter {
                name: "sat",
                description: "Rainbow saturation",
                optional: true,
            },
            TagParameter {
                name: "val",
                description: "Rainbow value/brightness",
                optional: true,
            },
            TagParameter {
                name: "speed",
                description: "Number of full rainbow cycles per second",
                optional: true,
            },
        ],
        example: Some("[rainbow freq=1.0 sat=0.8 val=0.8]Rainbow text[/rainbow]"),
        self_closing: false,
    },
    BBCodeTag {
        name: "fade",
        description: "Creates a static fade effect that multiplies each character's opacity.",
        parameters: &[
            TagParameter {
                name: "start",
                description: "Starting position of the falloff",
                optional: true,
            },
            TagParameter {
                name: "length",
                description: "Over how many characters the fade out should take place",
                optional: true,
            },
        ],
        example: Some("[fade start=4 length=14]Fading text[/fade]"),
        self_closing: false,
    },
];

/// All tags in catalogue order: built-ins, then dialogue tags, then effects.
pub fn all_tags() -> impl Iterator<Item = &'static BBCodeTag> {
    BUILTIN_TAGS
        .iter()
        .chain(DIALOGUE_TAGS.iter())
        .chain(EFFECT_TAGS.iter())
}

/// Every valid tag name, in catalogue order.
pub fn all_tag_names() -> Vec<&'static str> {
    all_tags().map(|tag| tag.name).collect()
}

/// Find a tag by exact name across all three groups.
pub fn find_tag(name: &str) -> Option<&'static BBCodeTag> {
    all_tags().find(|tag| tag.name == name)
}

/// Check whether a tag name exists in the catalogue.
pub fn is_valid_tag(name: &str) -> bool {
    all_tags().any(|tag| tag.name == name)
}

/// Render a tag descriptor as markdown for hover and completion docs.
pub fn tag_to_markdown(tag: &BBCodeTag) -> String {
    let mut md = format!("**[{}]** - {}\n\n", tag.name, tag.description);

    if !tag.parameters.is_empty() {
        md.push_str("**Parameters:**\n");
        for param in tag.parameters {
            md.push_str(&format!(
                "- `{}`{}: {}\n",
                param.name,
                if param.optional { " (optional)" } else { "" },
                param.description
            ));
        }
        md.push('\n');
    }

    if let Some(example) = tag.example {
        md.push_str(&format!("**Example:**\n```\n{}\n```\n", example));
    }

    md
}
