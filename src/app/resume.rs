use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{Keyed, AWARDS, CERTIFICATIONS, EDUCATION, EXPERIENCES};
use crate::motion::stagger;
use crate::reveal::Entrance;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience">
            <Reveal class="min-h-screen flex items-center justify-center p-8">
                <div class="max-w-4xl w-full">
                    <h2 class="text-4xl font-bold mb-12 text-center">"Experience"</h2>
                    <For
                        each=move || EXPERIENCES.into_iter().enumerate()
                        key=|(_, exp)| exp.key()
                        children=move |(index, exp)| {
                            view! {
                                <Reveal
                                    class="mb-8"
                                    entrance=Entrance::SlideLeft
                                    duration=0.5
                                    delay=stagger(index, 0.1)
                                >
                                    <h3 class="text-2xl font-bold">{exp.role}</h3>
                                    <p class="text-xl">{exp.company}</p>
                                    <p class="text-lg text-gray-400">{exp.period}</p>
                                </Reveal>
                            }
                        }
                    />
                </div>
            </Reveal>
        </section>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id="education">
            <Reveal class="min-h-screen flex items-center justify-center p-8">
                <div class="max-w-4xl w-full">
                    <h2 class="text-4xl font-bold mb-12 text-center">"Education"</h2>
                    <For
                        each=move || EDUCATION.into_iter().enumerate()
                        key=|(_, edu)| edu.key()
                        children=move |(index, edu)| {
                            view! {
                                <Reveal
                                    class="mb-8"
                                    entrance=Entrance::SlideLeft
                                    duration=0.5
                                    delay=stagger(index, 0.1)
                                >
                                    <h3 class="text-2xl font-bold">{edu.degree}</h3>
                                    <p class="text-xl">{edu.institution}</p>
                                    <p class="text-lg text-gray-400">{edu.period}</p>
                                </Reveal>
                            }
                        }
                    />
                </div>
            </Reveal>
        </section>
    }
}

/// Bulleted list of plain strings, keyed by position.
#[component]
fn HonorList(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-2xl font-bold mb-4">{title}</h3>
            <ul class="list-disc list-inside space-y-2">
                <For
                    each=move || items.iter().copied().enumerate()
                    key=|(index, _)| *index
                    children=move |(index, item)| {
                        view! {
                            <li>
                                // transforms need a box; a plain inline element would only fade
                                <Reveal
                                    class="inline-block"
                                    entrance=Entrance::Nudge
                                    duration=0.5
                                    delay=stagger(index, 0.1)
                                >
                                    {item}
                                </Reveal>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

#[component]
pub fn CertificationsSection() -> impl IntoView {
    view! {
        <section id="certifications">
            <Reveal class="min-h-screen flex items-center justify-center p-8">
                <div class="max-w-4xl w-full">
                    <h2 class="text-4xl font-bold mb-12 text-center">"Certifications & Awards"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <HonorList title="Certifications" items=&CERTIFICATIONS />
                        <HonorList title="Awards" items=&AWARDS />
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.set();
        f().into_view().to_html()
    }

    fn positions(html: &str, needles: impl IntoIterator<Item = &'static str>) -> Vec<usize> {
        needles
            .into_iter()
            .map(|n| {
                assert_eq!(html.matches(n).count(), 1, "{n} should render exactly once");
                html.find(n).unwrap_or_default()
            })
            .collect()
    }

    #[test]
    fn test_experience_in_source_order() {
        let html = render(|| view! { <ExperienceSection /> });
        let pos = positions(&html, EXPERIENCES.iter().map(|e| e.company));
        assert!(pos.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_education_in_source_order() {
        let html = render(|| view! { <EducationSection /> });
        let pos = positions(&html, EDUCATION.iter().map(|e| e.institution));
        assert!(pos.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_certifications_and_awards_render_each_item() {
        let html = render(|| view! { <CertificationsSection /> });
        assert_eq!(
            html.matches("<li").count(),
            CERTIFICATIONS.len() + AWARDS.len()
        );
        let pos = positions(&html, CERTIFICATIONS.into_iter().chain(AWARDS));
        assert!(pos.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_honor_items_slide_in_as_boxes() {
        let html = render(|| view! { <CertificationsSection /> });
        assert!(!html.contains(r#"class="inline""#));
        assert_eq!(
            html.matches(r#"class="inline-block""#).count(),
            CERTIFICATIONS.len() + AWARDS.len()
        );
        assert_eq!(
            html.matches("translateX(-20px)").count(),
            CERTIFICATIONS.len() + AWARDS.len()
        );
    }

    #[test]
    fn test_sections_start_hidden() {
        let html = render(|| view! { <EducationSection /> });
        // section wrapper plus one per entry
        assert_eq!(html.matches("opacity: 0;").count(), EDUCATION.len() + 1);
    }
}
