use folio_core::{Typewriter, TypewriterConfig};
use gloo_timers::callback::Timeout;
use web_sys as web;

const PHRASES: [&str; 3] = [
    "Medical Laboratory Technician",
    "Python Learner",
    "Web Developer",
];

fn run(el: web::Element, mut tw: Typewriter) {
    let step = tw.step();
    el.set_text_content(Some(&step.text));
    Timeout::new(step.delay_ms, move || run(el, tw)).forget();
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(el) = document.get_element_by_id("typewriter") else {
        return Ok(());
    };
    let tw = Typewriter::new(TypewriterConfig::new(PHRASES))?;
    log::debug!("[typewriter] cycling {} phrases", PHRASES.len());
    run(el, tw);
    Ok(())
}
