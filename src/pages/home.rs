//! The single page: navbar, hero, about, goals, and contact sections.

use leptos::prelude::*;

use crate::components::goals_section::GoalsSection;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="page">
            <Hero/>
            <section id="about" class="about-section">
                <h2 class="section-heading fade-in">"About this year"</h2>
                <p class="about-section__text fade-in">
                    "No grand reinvention, just a short list of things worth "
                    "finishing. Check them off below; the page remembers where "
                    "things stand, even across visits."
                </p>
            </section>
            <GoalsSection/>
            <section id="contact" class="contact-section">
                <h2 class="section-heading fade-in">"Say hello"</h2>
                <p class="contact-section__text fade-in">
                    "Chasing something similar this year? "
                    <a href="mailto:hello@goalpost.page">"Drop a note."</a>
                </p>
            </section>
            <footer class="footer">
                <p>"Built for the year ahead."</p>
            </footer>
        </main>
    }
}
