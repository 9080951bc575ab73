use yew::prelude::*;

use crate::animation::reveal::use_scroll_reveal;
use crate::components::layout::Layout;
use crate::pages::{
    about::AboutSection, contact::ContactSection, hero::HeroSection,
    insights::InsightsSection, portfolio::PortfolioSection, synergy_map::SynergyMapSection,
};

#[function_component]
pub fn Home() -> Html {
    use_scroll_reveal();

    html! {
        <Layout>
            <HeroSection />
            <PortfolioSection />
            <AboutSection />
            <SynergyMapSection />
            <InsightsSection />
            <ContactSection />
        </Layout>
    }
}
