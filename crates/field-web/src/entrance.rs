use web_sys as web;

use crate::constants::{ENTRANCE_CLASS, HEADLINE_ID};

/// One-shot text-reveal collaborator. The timeline itself lives in the host
/// page's CSS; mounting adds the trigger class to the headline and dropping
/// the handle reverts it, restoring the pre-mount markup.
pub struct Entrance {
    el: Option<web::Element>,
}

impl Entrance {
    pub fn start(document: &web::Document) -> Self {
        let el = document.get_element_by_id(HEADLINE_ID);
        if let Some(el) = &el {
            _ = el.class_list().add_1(ENTRANCE_CLASS);
        } else {
            log::warn!("missing #{HEADLINE_ID}; entrance effect skipped");
        }
        Self { el }
    }
}

impl Drop for Entrance {
    fn drop(&mut self) {
        if let Some(el) = &self.el {
            _ = el.class_list().remove_1(ENTRANCE_CLASS);
        }
    }
}
