use yew::prelude::*;
use chrono::Datelike;

#[function_component]
pub fn Footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 0;
                    border-top: 1px solid rgba(0, 255, 255, 0.2);
                    text-align: center;
                    color: #6B7280;
                }
                .site-footer .social-links {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-top: 1.5rem;
                }
                .site-footer .social-links a:hover {
                    color: #FFFFFF;
                }
                "#}
            </style>
            <div class="container">
                <p>{format!("© {} Trivex Inc. All rights reserved.", year)}</p>
                <p style="margin-top: 0.5rem;">{"From Silicon to Software—We Engineer Synergy."}</p>
                <div class="social-links">
                    <a href="#">{"Twitter"}</a>
                    <a href="#">{"LinkedIn"}</a>
                    <a href="#">{"GitHub"}</a>
                </div>
            </div>
        </footer>
    }
}
