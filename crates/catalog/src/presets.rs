//! Static preset definitions.

use crate::PresetDefinition;

/// Ordered list of bundled presets.
pub const PRESET_DEFINITIONS: &[PresetDefinition] = &[
    PresetDefinition {
        id: "modern",
        title: "Modern Theme",
        subtitle: "Sleek interface with azure accents",
        dark: [
            ("Jet Black", "#181A1B", "Main background"),
            ("Charcoal Gray", "#212325", "Surfaces"),
            ("Azure Blue", "#0099FF", "Primary actions"),
            ("Cyan Blue", "#38B6FF", "Links and toggles"),
            ("Soft White", "#F1F1F1", "Main text"),
            ("Light Gray", "#B3BAC2", "Muted text"),
            ("Slate Gray", "#2C2F32", "Borders"),
        ],
        light: [
            ("Paper White", "#FFFFFF", "Main background"),
            ("Card Gray", "#F4F6F8", "Surfaces"),
            ("Action Blue", "#2563EB", "Primary actions"),
            ("Link Blue", "#3B82F6", "Links"),
            ("Text Dark", "#0F172A", "Primary text"),
            ("Muted Text", "#6B7280", "Secondary text"),
            ("Border Gray", "#E5E7EB", "Borders"),
        ],
    },
    PresetDefinition {
        id: "blue-professional",
        title: "Blue Professional",
        subtitle: "Business palette with navy base",
        dark: [
            ("Navy", "#0B1220", "Main background"),
            ("Panel Blue", "#101A2C", "Surfaces"),
            ("Primary Blue", "#1D4ED8", "Primary actions"),
            ("Sky", "#38BDF8", "Links and highlights"),
            ("Off White", "#F8FAFC", "Headings"),
            ("Muted", "#94A3B8", "Muted text"),
            ("Divider", "#1F2937", "Borders"),
        ],
        light: [
            ("Porcelain", "#FAFBFF", "Main background"),
            ("Sheet", "#EEF2FF", "Surfaces"),
            ("Royal Blue", "#1D4ED8", "Primary actions"),
            ("Sky", "#38BDF8", "Links"),
            ("Charcoal", "#0B1220", "Headings"),
            ("Muted", "#475569", "Muted text"),
            ("Divider", "#CBD5E1", "Borders"),
        ],
    },
    PresetDefinition {
        id: "emerald-luxury",
        title: "Luxury Emerald",
        subtitle: "Deep emerald with warm neutrals",
        dark: [
            ("Carbon", "#121414", "Main background"),
            ("Obsidian", "#1B1F1E", "Surfaces"),
            ("Emerald", "#10B981", "Primary actions"),
            ("Mint", "#34D399", "Links"),
            ("Ivory", "#F5F5F4", "Text"),
            ("Greige", "#A8A29E", "Muted text"),
            ("Basalt", "#2A2E2C", "Borders"),
        ],
        light: [
            ("Ivory", "#FFFFFB", "Main background"),
            ("Parchment", "#F3F2ED", "Surfaces"),
            ("Emerald", "#10B981", "Primary actions"),
            ("Mint", "#34D399", "Links"),
            ("Ink", "#111827", "Text"),
            ("Stone", "#6B7280", "Muted text"),
            ("Divider", "#E5E7EB", "Borders"),
        ],
    },
    PresetDefinition {
        id: "soft-sand-champagne",
        title: "Soft Sand & Champagne",
        subtitle: "Warm neutrals with soft gold accents",
        dark: [
            ("Night Sand", "#141414", "Main background"),
            ("Taupe", "#2A2A2A", "Surfaces"),
            ("Champagne", "#F4DAB3", "Primary actions"),
            ("Gold", "#E6C07B", "Links"),
            ("Ivory", "#F7F7F5", "Text"),
            ("Warm Gray", "#B8B4AE", "Muted text"),
            ("Drift", "#3A3A3A", "Borders"),
        ],
        light: [
            ("Sand", "#FFFBF5", "Main background"),
            ("Shell", "#F5EFE6", "Surfaces"),
            ("Champagne", "#E7CBA9", "Primary actions"),
            ("Gold", "#D6AE6A", "Links"),
            ("Ink", "#1F2937", "Text"),
            ("Mushroom", "#8B8680", "Muted text"),
            ("Border", "#E6E2DC", "Borders"),
        ],
    },
    PresetDefinition {
        id: "aqua-fresh",
        title: "Aqua Fresh Modern",
        subtitle: "Cool aqua with crisp whites",
        dark: [
            ("Deep Sea", "#0E1A1E", "Main background"),
            ("Reef", "#142329", "Surfaces"),
            ("Aqua", "#04C8C8", "Primary actions"),
            ("Teal", "#2DD4BF", "Links"),
            ("Foam", "#E6FFFB", "Text"),
            ("Mist", "#93C5C5", "Muted text"),
            ("Kelp", "#1F3A3A", "Borders"),
        ],
        light: [
            ("Foam", "#F8FFFF", "Main background"),
            ("Shore", "#E8F8F8", "Surfaces"),
            ("Aqua", "#06B6D4", "Primary actions"),
            ("Teal", "#14B8A6", "Links"),
            ("Slate", "#0F172A", "Text"),
            ("Sea Smoke", "#64748B", "Muted text"),
            ("Border", "#D1FAF5", "Borders"),
        ],
    },
    PresetDefinition {
        id: "burgundy-wine",
        title: "Burgundy Wine",
        subtitle: "Rich reds with deep accents",
        dark: [
            ("Cellar", "#16080B", "Main background"),
            ("Barrel", "#241016", "Surfaces"),
            ("Burgundy", "#7A1E2C", "Primary actions"),
            ("Rose", "#E11D48", "Links"),
            ("Cream", "#FEF2F2", "Text"),
            ("Blush", "#F9A8D4", "Muted text"),
            ("Grape Skin", "#3A0D16", "Borders"),
        ],
        light: [
            ("Linen", "#FFF5F7", "Main background"),
            ("Porcelain", "#FFE9EE", "Surfaces"),
            ("Burgundy", "#881337", "Primary actions"),
            ("Rose", "#DB2777", "Links"),
            ("Ink", "#1F2937", "Text"),
            ("Ash", "#64748B", "Muted text"),
            ("Border", "#FAD1E8", "Borders"),
        ],
    },
    PresetDefinition {
        id: "coral-sunset",
        title: "Coral Sunset",
        subtitle: "Warm coral and peach tones",
        dark: [
            ("Dusk", "#1A1412", "Main background"),
            ("Clay", "#2A1F1C", "Surfaces"),
            ("Coral", "#FB7185", "Primary actions"),
            ("Peach", "#FCA5A5", "Links"),
            ("Lace", "#FFF1F2", "Text"),
            ("Blush", "#FBCFE8", "Muted text"),
            ("Terracotta", "#3B2A28", "Borders"),
        ],
        light: [
            ("Lace", "#FFF7F7", "Main background"),
            ("Shell", "#FFECEC", "Surfaces"),
            ("Coral", "#F97316", "Primary actions"),
            ("Peach", "#FDA4AF", "Links"),
            ("Ink", "#111827", "Text"),
            ("Mauve", "#6B7280", "Muted text"),
            ("Border", "#FED7D7", "Borders"),
        ],
    },
    PresetDefinition {
        id: "deep-purple-royalty",
        title: "Deep Purple Royalty",
        subtitle: "Royal purples with cool contrasts",
        dark: [
            ("Midnight", "#0E0A1A", "Main background"),
            ("Plum", "#1A1226", "Surfaces"),
            ("Royal", "#6D28D9", "Primary actions"),
            ("Amethyst", "#A78BFA", "Links"),
            ("Snow", "#F5F3FF", "Text"),
            ("Lilac", "#C4B5FD", "Muted text"),
            ("Grape", "#2D1B49", "Borders"),
        ],
        light: [
            ("Snow", "#FCFAFF", "Main background"),
            ("Lavender", "#F3E8FF", "Surfaces"),
            ("Royal", "#7C3AED", "Primary actions"),
            ("Amethyst", "#A78BFA", "Links"),
            ("Ink", "#111827", "Text"),
            ("Slate", "#6B7280", "Muted text"),
            ("Border", "#E9D5FF", "Borders"),
        ],
    },
    PresetDefinition {
        id: "mocha-warmth",
        title: "Mocha Warmth",
        subtitle: "Cozy browns with cream contrasts",
        dark: [
            ("Espresso", "#14100C", "Main background"),
            ("Mocha", "#231A14", "Surfaces"),
            ("Caramel", "#D97706", "Primary actions"),
            ("Amber", "#F59E0B", "Links"),
            ("Cream", "#FAF7F2", "Text"),
            ("Latte", "#D6CCC2", "Muted text"),
            ("Bean", "#3B2F2F", "Borders"),
        ],
        light: [
            ("Cream", "#FFFCF7", "Main background"),
            ("Oat", "#F4ECE3", "Surfaces"),
            ("Caramel", "#D97706", "Primary actions"),
            ("Amber", "#F59E0B", "Links"),
            ("Cocoa", "#1F2937", "Text"),
            ("Latte", "#7D6F67", "Muted text"),
            ("Border", "#E9E1D9", "Borders"),
        ],
    },
    PresetDefinition {
        id: "ethereal-gradient",
        title: "Ethereal Gradient",
        subtitle: "Soft gradient-inspired blues and violets",
        dark: [
            ("Cosmos", "#0B1020", "Main background"),
            ("Nebula", "#151A2E", "Surfaces"),
            ("Iris", "#6366F1", "Primary actions"),
            ("Aqua Glow", "#22D3EE", "Links"),
            ("Starlight", "#E2E8F0", "Text"),
            ("Mist", "#94A3B8", "Muted text"),
            ("Orbit", "#27324A", "Borders"),
        ],
        light: [
            ("Starlight", "#F5F7FF", "Main background"),
            ("Cloud", "#EEF2FF", "Surfaces"),
            ("Iris", "#6366F1", "Primary actions"),
            ("Aqua Glow", "#06B6D4", "Links"),
            ("Ink", "#0F172A", "Text"),
            ("Ash", "#64748B", "Muted text"),
            ("Border", "#E2E8F0", "Borders"),
        ],
    },
    PresetDefinition {
        id: "green-modern",
        title: "Green Modern",
        subtitle: "Modern UI with vivid green accents",
        dark: [
            ("Graphite", "#111315", "Main background"),
            ("Charcoal", "#1B1F22", "Surfaces"),
            ("Lime", "#22C55E", "Primary actions"),
            ("Mint", "#34D399", "Links"),
            ("Snow", "#F3F4F6", "Text"),
            ("Dust", "#9CA3AF", "Muted text"),
            ("Steel", "#2F3439", "Borders"),
        ],
        light: [
            ("White", "#FFFFFF", "Main background"),
            ("Panel", "#F5F7F9", "Surfaces"),
            ("Lime", "#22C55E", "Primary actions"),
            ("Mint", "#10B981", "Links"),
            ("Ink", "#0F172A", "Text"),
            ("Muted", "#6B7280", "Muted text"),
            ("Border", "#E5E7EB", "Borders"),
        ],
    },
    PresetDefinition {
        id: "pink-trendy",
        title: "Pink Trendy",
        subtitle: "Trendy pinks with soft neutrals",
        dark: [
            ("Char", "#141216", "Main background"),
            ("Smoky", "#1E1A21", "Surfaces"),
            ("Hot Pink", "#EC4899", "Primary actions"),
            ("Candy", "#F472B6", "Links"),
            ("Porcelain", "#FDF2F8", "Text"),
            ("Rose Dust", "#F5A6C9", "Muted text"),
            ("Border", "#3A2A35", "Borders"),
        ],
        light: [
            ("Blush", "#FFF7FB", "Main background"),
            ("Shell", "#FCE7F3", "Surfaces"),
            ("Hot Pink", "#DB2777", "Primary actions"),
            ("Candy", "#F472B6", "Links"),
            ("Ink", "#111827", "Text"),
            ("Muted", "#6B7280", "Muted text"),
            ("Border", "#FBCFE8", "Borders"),
        ],
    },
    PresetDefinition {
        id: "enterprise-neutral",
        title: "Enterprise Neutral",
        subtitle: "Corporate friendly neutral palette",
        dark: [
            ("Pitch", "#0F1113", "Main background"),
            ("Panel", "#171A1E", "Surfaces"),
            ("Blue Accent", "#3B82F6", "Primary actions"),
            ("Cyan", "#22D3EE", "Links"),
            ("Silver", "#E5E7EB", "Text"),
            ("Slate", "#94A3B8", "Muted text"),
            ("Divider", "#2B3138", "Borders"),
        ],
        light: [
            ("Paper", "#FFFFFF", "Main background"),
            ("Sheet", "#F3F4F6", "Surfaces"),
            ("Blue Accent", "#2563EB", "Primary actions"),
            ("Cyan", "#06B6D4", "Links"),
            ("Charcoal", "#0F172A", "Text"),
            ("Muted", "#6B7280", "Muted text"),
            ("Border", "#E5E7EB", "Borders"),
        ],
    },
    PresetDefinition {
        id: "professional-slate",
        title: "Professional Slate",
        subtitle: "Serious slate grays with blue highlights",
        dark: [
            ("Coal", "#0E0F12", "Main background"),
            ("Slate", "#171A20", "Surfaces"),
            ("Steel Blue", "#3B82F6", "Primary actions"),
            ("Sky", "#60A5FA", "Links"),
            ("Frost", "#E5E7EB", "Text"),
            ("Ash", "#9CA3AF", "Muted text"),
            ("Divider", "#2A2F38", "Borders"),
        ],
        light: [
            ("Porcelain", "#F8FAFC", "Main background"),
            ("Panel", "#EEF2F7", "Surfaces"),
            ("Steel Blue", "#2563EB", "Primary actions"),
            ("Sky", "#60A5FA", "Links"),
            ("Charcoal", "#0B1220", "Text"),
            ("Muted", "#64748B", "Muted text"),
            ("Border", "#D1D5DB", "Borders"),
        ],
    },
];
