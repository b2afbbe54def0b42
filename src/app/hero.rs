use leptos::prelude::*;

use crate::{
    content::{content, HeroSlide},
    page::Section,
    particles::PARTICLES_ID,
};

#[component]
pub fn Hero() -> impl IntoView {
    let slides = &content().profile.slides;
    view! {
        <section
            id=Section::Home.anchor()
            class="js-fullheight relative"
            data-section=Section::Home.anchor()
        >
            <div class="flexslider js-fullheight">
                <ParticlesBackground />
                <ul class="slides">
                    {slides.iter().map(|slide| view! { <Slide slide /> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}

#[component]
fn Slide(slide: &'static HeroSlide) -> impl IntoView {
    let last = slide.heading.len().saturating_sub(1);
    let heading = slide
        .heading
        .iter()
        .enumerate()
        .map(|(i, line)| {
            view! {
                {line.as_str()}
                {(i < last).then(|| view! { <br /> })}
            }
        })
        .collect_view();

    view! {
        <li style=format!("background-image: url({});", slide.background)>
            <div class="overlay" />
            <div class="container-fluid">
                <div class="js-fullheight slider-text">
                    <div class="slider-text-inner js-fullheight">
                        <div class="desc">
                            <h1>{heading}</h1>
                            <p>
                                <a
                                    class="btn btn-primary btn-learn"
                                    href=slide.href.as_str()
                                    target=slide.external.then_some("_blank")
                                    rel=slide.external.then_some("noopener noreferrer")
                                >
                                    {slide.link_label.as_str()}
                                    " "
                                    <i class=slide.icon.as_str() />
                                </a>
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </li>
    }
}

/// Canvas host for particles.js. The script draws into it once hydrated.
#[component]
fn ParticlesBackground() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| start_particles(&crate::particles::ParticlesConfig::default()));

    view! { <div id=PARTICLES_ID class="particles absolute inset-0"></div> }
}

#[cfg(feature = "hydrate")]
mod js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = JSON, js_name = parse)]
        pub fn json_parse(text: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch, js_name = particlesJS)]
        pub fn particles_js(tag_id: &str, params: JsValue) -> Result<(), JsValue>;
    }
}

#[cfg(feature = "hydrate")]
fn start_particles(config: &crate::particles::ParticlesConfig) {
    let params = match config.to_json() {
        Ok(params) => params,
        Err(e) => {
            log::warn!("couldn't serialize particles config: {e}");
            return;
        }
    };
    // particles.js is loaded from a CDN and may be blocked
    if let Err(e) = js::json_parse(&params).and_then(|p| js::particles_js(PARTICLES_ID, p)) {
        log::warn!("particles background unavailable: {e:?}");
    }
}
