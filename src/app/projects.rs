use leptos::{html, prelude::*};

use super::reveal::{use_reveal, Reveal};
use super::use_theme;
use crate::content::{Keyed, Project, Skill, PROJECTS, SKILLS};
use crate::motion::stagger;
use crate::reveal::{reveal_style, Entrance};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills">
            <Reveal class="min-h-screen flex items-center justify-center p-8">
                <div class="max-w-4xl w-full">
                    <h2 class="text-4xl font-bold mb-12 text-center">"Skills & Expertise"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <For
                            each=move || SKILLS.into_iter().enumerate()
                            key=|(_, skill)| skill.key()
                            children=move |(index, skill)| view! { <SkillBar skill index /> }
                        />
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

/// Labelled bar that fills to the skill's level once scrolled into view.
#[component]
fn SkillBar(skill: Skill, index: usize) -> impl IntoView {
    let theme = use_theme();
    let target = NodeRef::<html::Div>::new();
    let visibility = use_reveal(target);
    let delay = stagger(index, 0.1);

    view! {
        <div
            node_ref=target
            class="mb-4"
            style=move || reveal_style(visibility.get(), Entrance::SlideLeft, 0.5, delay)
        >
            <div class="flex justify-between mb-1">
                <span class="text-lg font-semibold">{skill.name}</span>
                <span class="text-lg font-bold">{format!("{}%", skill.level)}</span>
            </div>
            <div class=move || {
                format!(
                    "h-3 rounded-full overflow-hidden {}",
                    theme.get().pick("bg-gray-700", "bg-gray-300"),
                )
            }>
                <div
                    class=move || format!("h-full {}", theme.get().accent_class())
                    style=move || {
                        let width = if visibility.get().is_seen() { skill.level } else { 0 };
                        format!("width: {width}%; transition: width 0.8s ease-out {delay:.2}s;")
                    }
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects">
            <Reveal class="min-h-screen p-8">
                <h2 class="text-4xl font-bold mb-16 text-center">"Featured Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-6xl mx-auto">
                    <For
                        each=move || PROJECTS.into_iter().enumerate()
                        key=|(_, project)| project.key()
                        children=move |(index, project)| {
                            view! {
                                <Reveal delay=stagger(index, 0.2)>
                                    <ProjectCard project />
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
fn ProjectCard(project: Project) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class="group relative overflow-hidden rounded-lg shadow-lg project-image transition-transform duration-300 hover:scale-105">
            <img src=project.image alt=project.title class="w-full h-64 object-cover" />
            <div class=move || {
                format!(
                    "absolute inset-0 flex flex-col justify-center items-center p-6 opacity-0 group-hover:opacity-100 transition-opacity duration-300 {}",
                    theme.get().overlay_class(),
                )
            }>
                <h3 class="text-2xl font-bold mb-2">{project.title}</h3>
                <p class="text-center mb-4">{project.description}</p>
                <p class="text-sm mb-4">{project.tech}</p>
                <span class=move || {
                    format!(
                        "px-4 py-2 rounded-full text-sm font-semibold {}",
                        theme.get().pick("bg-white text-black", "bg-black text-white"),
                    )
                }>{project.category}</span>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.set();
        provide_context(RwSignal::new(ThemeMode::default()));
        f().into_view().to_html()
    }

    fn assert_in_order(html: &str, needles: &[&str]) {
        let positions = needles
            .iter()
            .map(|n| {
                assert_eq!(html.matches(n).count(), 1, "{n} should render exactly once");
                html.find(n).unwrap_or_default()
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_projects_render_once_in_order() {
        let html = render(|| view! { <ProjectsSection /> });
        // titles also appear in image alt text
        let titles = PROJECTS
            .iter()
            .map(|p| format!(">{}<", p.title))
            .collect::<Vec<_>>();
        let titles = titles.iter().map(String::as_str).collect::<Vec<_>>();
        assert_in_order(&html, &titles);
        assert!(html.contains(r#"id="projects""#));
    }

    #[test]
    fn test_skill_bars_start_empty() {
        let html = render(|| view! { <SkillsSection /> });
        let labels = SKILLS
            .iter()
            .map(|s| format!(">{}<", s.name))
            .collect::<Vec<_>>();
        let labels = labels.iter().map(String::as_str).collect::<Vec<_>>();
        assert_in_order(&html, &labels);
        assert_eq!(html.matches("width: 0%").count(), SKILLS.len());
    }

    #[test]
    fn test_card_overlay_is_tinted() {
        let html = render(|| view! { <ProjectsSection /> });
        assert!(!html.contains("bg-opacity"));
        assert_eq!(html.matches("bg-black/70 text-white").count(), PROJECTS.len());
    }
}
