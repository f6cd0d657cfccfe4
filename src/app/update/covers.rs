use super::super::state::App;
use super::Effect;

impl App {
    /// Cover loads for the visible page and the one after it.
    pub(in crate::app) fn cover_effects(&mut self) -> Vec<Effect> {
        if !self.config.load_covers {
            return Vec::new();
        }
        let carousel = &self.section.carousel;
        let layout = carousel.layout();
        let current = carousel.current_page();
        let pager = carousel.pager();
        let upcoming = pager
            .page(current)
            .into_iter()
            .chain(pager.page(current + 1))
            .flatten();

        let mut effects = Vec::new();
        for item in upcoming {
            let url = self.catalog.cover_url(&item.id, layout);
            if self.covers.request(url) {
                effects.push(Effect::LoadCover {
                    url: url.to_string(),
                });
            }
        }
        effects
    }
}
