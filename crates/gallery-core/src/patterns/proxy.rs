//! Proxy: lazily loaded images behind lightweight placeholders

use super::{find_scenario, PatternDemo, PatternKind, ScenarioSpec};
use crate::transcript::{Comparison, Transcript};

const SCENARIOS: &[ScenarioSpec] = &[
    ScenarioSpec {
        id: "show-first",
        label: "Show mountains.jpg",
        key: 'a',
    },
    ScenarioSpec {
        id: "show-second",
        label: "Show ocean.jpg",
        key: 's',
    },
];

/// Subject interface shared by the real image and its proxy
pub trait Image {
    fn filename(&self) -> &str;
    fn display(&mut self, out: &mut Transcript);
}

/// The heavyweight resource
pub struct RealImage {
    filename: String,
    width: u32,
    height: u32,
}

impl RealImage {
    /// Expensive: reads and decodes the file
    pub fn load(filename: &str, out: &mut Transcript) -> Self {
        out.highlight(format!("Loading {filename} from disk..."));
        tracing::debug!("RealImage loaded: {filename}");
        Self {
            filename: filename.to_string(),
            width: 1920,
            height: 1080,
        }
    }
}

impl Image for RealImage {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn display(&mut self, out: &mut Transcript) {
        out.result(format!(
            "Displaying {} ({}x{})",
            self.filename, self.width, self.height
        ));
    }
}

/// Placeholder that creates the real image on first display and keeps it
pub struct ImageProxy {
    filename: String,
    real: Option<RealImage>,
    loads: u32,
}

impl ImageProxy {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            real: None,
            loads: 0,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real.is_some()
    }

    /// How many times the real image was constructed
    pub fn loads(&self) -> u32 {
        self.loads
    }
}

impl Image for ImageProxy {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn display(&mut self, out: &mut Transcript) {
        out.step(format!("ImageProxy({}).display()", self.filename));
        let real = match self.real.take() {
            Some(real) => {
                out.highlight(format!("Using cached {}", self.filename));
                real
            }
            None => {
                self.loads += 1;
                RealImage::load(&self.filename, out)
            }
        };
        let real = self.real.insert(real);
        real.display(out);
    }
}

pub struct ProxyDemo {
    placeholders: [ImageProxy; 2],
}

impl ProxyDemo {
    /// Placeholders are cheap, so both exist from the moment the panel mounts
    pub fn new() -> Self {
        Self {
            placeholders: [ImageProxy::new("mountains.jpg"), ImageProxy::new("ocean.jpg")],
        }
    }

    pub fn placeholder(&self, index: usize) -> Option<&ImageProxy> {
        self.placeholders.get(index)
    }

    fn show(&mut self, index: usize) -> Transcript {
        let mut t = Transcript::new();
        self.placeholders[index].display(&mut t);
        t
    }
}

impl Default for ProxyDemo {
    fn default() -> Self {
        Self::new()
    }
}

const GALLERY: [&str; 3] = ["mountains.jpg", "ocean.jpg", "forest.jpg"];

impl PatternDemo for ProxyDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Proxy
    }

    fn scenarios(&self) -> &'static [ScenarioSpec] {
        SCENARIOS
    }

    fn run(&mut self, id: &str) -> Option<Transcript> {
        match find_scenario(SCENARIOS, id)?.id {
            "show-first" => Some(self.show(0)),
            "show-second" => Some(self.show(1)),
            _ => None,
        }
    }

    fn comparison(&self) -> Comparison {
        let mut good = Transcript::new();
        good.info(format!("Open a gallery of {} proxies", GALLERY.len()));
        let mut proxies: Vec<ImageProxy> = GALLERY.iter().map(|f| ImageProxy::new(*f)).collect();
        proxies[0].display(&mut good);
        let loaded = proxies.iter().filter(|p| p.is_loaded()).count();
        good.result(format!(
            "Images loaded: {loaded} of {} (only what was viewed)",
            GALLERY.len()
        ));

        let mut bad = Transcript::new();
        bad.info(format!("Open a gallery of {} real images", GALLERY.len()));
        let mut images: Vec<RealImage> = GALLERY
            .iter()
            .map(|f| RealImage::load(f, &mut bad))
            .collect();
        images[0].display(&mut bad);
        bad.warning(format!(
            "Images loaded: {} of {} before anything was viewed",
            images.len(),
            GALLERY.len()
        ));

        Comparison {
            good,
            bad,
            note: "The proxy defers the expensive load until an image is actually shown and \
                   then reuses it; eager loading pays for every image up front.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_image_constructed_once_for_k_displays() {
        for k in 1..=5 {
            let mut proxy = ImageProxy::new("a.png");
            let mut transcripts = Vec::new();
            for _ in 0..k {
                let mut t = Transcript::new();
                proxy.display(&mut t);
                transcripts.push(t);
            }
            assert_eq!(proxy.loads(), 1);
            assert!(transcripts[0].contains("Loading a.png"));
            for t in &transcripts[1..] {
                assert!(!t.contains("Loading"));
                assert!(t.contains("Using cached a.png"));
            }
        }
    }

    #[test]
    fn test_placeholders_do_not_share_a_cache() {
        let mut demo = ProxyDemo::new();
        demo.run("show-first");
        assert!(demo.placeholder(0).unwrap().is_loaded());
        assert!(!demo.placeholder(1).unwrap().is_loaded());

        let t = demo.run("show-second").unwrap();
        assert!(t.contains("Loading ocean.jpg"));
        assert_eq!(demo.placeholder(1).unwrap().loads(), 1);
    }

    #[test]
    fn test_nothing_loaded_at_mount() {
        let demo = ProxyDemo::new();
        assert!(!demo.placeholder(0).unwrap().is_loaded());
        assert!(!demo.placeholder(1).unwrap().is_loaded());
    }

    #[test]
    fn test_display_always_ends_with_result_line() {
        let mut demo = ProxyDemo::new();
        for _ in 0..2 {
            let t = demo.run("show-first").unwrap();
            assert_eq!(
                t.texts().last(),
                Some("Displaying mountains.jpg (1920x1080)")
            );
        }
    }

    #[test]
    fn test_comparison_counts_loads() {
        let cmp = ProxyDemo::new().comparison();
        assert!(cmp.good.contains("Images loaded: 1 of 3"));
        assert!(cmp.bad.contains("Images loaded: 3 of 3"));
    }
}
