use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;
use plutchik::Ink;

pub struct ThemeColors {
    pub outline: Srgba<f64>,
    pub highlight: Srgba<f64>,
    pub highlight_core: Srgba<f64>,
    pub hover: Srgba<f64>,
    pub center_disc: Srgba<f64>,
    pub label_light: Srgba<f64>,
    pub label_dark: Srgba<f64>,
    pub title: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            outline: Srgba::new(1.0, 1.0, 1.0, 1.0),
            highlight: Self::lookup_color(
                context,
                "accent_color",
                Srgba::new(1.0, 0.843, 0.0, 1.0),
                None,
            ),
            highlight_core: Srgba::new(1.0, 1.0, 1.0, 1.0),
            hover: Srgba::new(1.0, 1.0, 1.0, 0.3),
            center_disc: Self::lookup_color(
                context,
                "theme_base_color",
                Srgba::new(1.0, 1.0, 1.0, 0.95),
                Some(0.95),
            ),
            label_light: Srgba::new(1.0, 1.0, 1.0, 1.0),
            label_dark: Srgba::new(0.2, 0.2, 0.2, 1.0),
            title: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.2, 0.2, 0.2, 1.0),
                Some(1.0),
            ),
        }
    }

    pub fn ink(&self, ink: Ink) -> Srgba<f64> {
        match ink {
            Ink::Data(color) => {
                let (r, g, b) = color.into_format::<f64>().into_components();
                Srgba::new(r, g, b, 1.0)
            }
            Ink::Outline => self.outline,
            Ink::Highlight => self.highlight,
            Ink::Hover => self.hover,
            Ink::CenterDisc => self.center_disc,
            Ink::LabelLight => self.label_light,
            Ink::LabelDark => self.label_dark,
            Ink::Title => self.title,
        }
    }

    /// Contrasting color drawn behind text in `ink`.
    pub fn halo(&self, ink: Ink) -> Srgba<f64> {
        match ink {
            Ink::LabelLight => Srgba::new(0.0, 0.0, 0.0, 0.5),
            _ => Srgba::new(1.0, 1.0, 1.0, 0.8),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.plutchik-wheel {
    background: none;
}
.dyad-title {
    font-size: 20pt;
    font-weight: bold;
}
.dyad-score {
    font-weight: bold;
}
.browse-row {
    padding: 2px 8px;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
