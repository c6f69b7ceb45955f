use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::{ContactSection, Footer};
use super::cursor::SwirlCursor;
use super::icons::{Icon, IconKind};
use super::marquee::{AnimatedText, Marquee, Welcome3D};
use super::navbar::Navbar;
use super::progress::ScrollProgress;
use super::projects::{ProjectsSection, SkillsSection};
use super::resume::{CertificationsSection, EducationSection, ExperienceSection};
use super::reveal::Reveal;
use super::use_theme;
use crate::content::{
    company_names, skill_names, ABOUT, CERTIFICATIONS, DEVELOPER_QUOTES, HERO_IMAGE, OWNER_NAME,
    OWNER_TITLE,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();
    view! {
        <Title text="Portfolio" />
        <div class=move || {
            format!(
                "min-h-screen font-sans transition-colors duration-300 {}",
                theme.get().page_class(),
            )
        }>
            <SwirlCursor />
            <ScrollProgress />
            <Navbar />
            <main class="font-geist pt-16 sm:pt-20">
                <Hero />
                <Marquee items=DEVELOPER_QUOTES.to_vec() />
                <About />
                <Marquee items=skill_names() />
                <SkillsSection />
                <ProjectsSection />
                <Marquee items=company_names() />
                <ExperienceSection />
                <EducationSection />
                <Marquee items=CERTIFICATIONS.to_vec() />
                <CertificationsSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section class="h-screen flex flex-col items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 z-0 animate-zoom-in">
                <img src=HERO_IMAGE alt=OWNER_NAME class="w-full h-full object-cover opacity-90" />
            </div>
            <h2 class="text-5xl md:text-7xl font-bold mb-4 text-center relative z-10 opacity-0 animate-rise-in [animation-delay:500ms]">
                <AnimatedText text=OWNER_NAME />
            </h2>
            <p class="text-2xl md:text-3xl mb-8 text-center relative z-10 opacity-0 animate-rise-in [animation-delay:700ms]">
                <AnimatedText text=OWNER_TITLE />
            </p>
            <a
                href="#projects"
                class=move || {
                    format!(
                        "px-8 py-3 rounded-full text-xl font-semibold transition-all relative z-10 hover:scale-105 active:scale-95 {}",
                        theme.get().button_class(),
                    )
                }
            >
                "Explore My Work"
            </a>
            <div class="absolute bottom-8 z-10 opacity-0 animate-bob [animation-delay:2s]">
                <Icon kind=IconKind::ChevronDown class="w-10 h-10" />
            </div>
            <Welcome3D text="Welcome" />
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about">
            <Reveal class="min-h-screen flex items-center justify-center p-8">
                <div class="max-w-4xl text-center">
                    <h2 class="text-4xl font-bold mb-8">"About Me"</h2>
                    <p class="text-xl leading-relaxed mb-6">{ABOUT[0]}</p>
                    <p class="text-xl leading-relaxed">{ABOUT[1]}</p>
                </div>
            </Reveal>
        </section>
    }
}
