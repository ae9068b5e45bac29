use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::fade_in::use_fade_in;
use crate::content::{gallery_images, CONTACT_ITEMS, FEATURES, INFO_CARDS, MENU};
use crate::gallery::lightbox::Gallery;

#[function_component(Home)]
pub fn home() -> Html {
    use_fade_in();

    let images = use_memo(|_| gallery_images(), ());
    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"Musik-Café Berlin"}</h1>
                    <p class="hero-subtitle">{"Kaffee, Kuchen und Live-Musik mitten in Kreuzberg."}</p>
                    <div class="hero-cta-group">
                        <a href="#menu" class="hero-cta">{"Zur Karte"}</a>
                        <a href="#contact" class="hero-cta secondary">{"Tisch anfragen"}</a>
                    </div>
                </div>
            </section>

            <section id="about" class="features">
                <h2>{"Über uns"}</h2>
                <div class="features-grid">
                    {
                        for FEATURES.iter().map(|feature| html! {
                            <div class="feature-item">
                                <span class="feature-icon">{feature.icon}</span>
                                <h3>{feature.title}</h3>
                                <p>{feature.text}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="menu" class="menu">
                <h2>{"Unsere Karte"}</h2>
                <div class="menu-grid">
                    {
                        for MENU.iter().map(|category| html! {
                            <div class="menu-category">
                                <h3>{category.title}</h3>
                                <ul>
                                    {
                                        for category.items.iter().map(|(item, price)| html! {
                                            <li><span>{*item}</span><span class="price">{*price}</span></li>
                                        })
                                    }
                                </ul>
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="gallery" class="gallery">
                <h2>{"Galerie"}</h2>
                <Gallery images={(*images).clone()} />
            </section>

            <section id="info" class="info">
                <h2>{"Infos"}</h2>
                <div class="info-grid">
                    {
                        for INFO_CARDS.iter().map(|card| html! {
                            <div class="info-card">
                                <h3>{card.title}</h3>
                                { for card.lines.iter().map(|line| html! { <p>{*line}</p> }) }
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="contact" class="contact">
                <h2>{"Kontakt"}</h2>
                <div class="contact-layout">
                    <div class="contact-details">
                        {
                            for CONTACT_ITEMS.iter().map(|(icon, text)| html! {
                                <div class="contact-item">
                                    <span class="contact-icon">{*icon}</span>
                                    <span>{*text}</span>
                                </div>
                            })
                        }
                    </div>
                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <p>{format!("© {} Musik-Café Berlin", year)}</p>
                <a href="#home">{"Nach oben"}</a>
            </footer>

            <style>
                {r#"
                :root {
                    --primary-color: #8b4513;
                    --primary-dark: #5d2e0c;
                    --secondary-color: #f4a261;
                    --text-color: #2b2b2b;
                }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: var(--text-color);
                }
                .landing-page section {
                    padding: 5rem 1.5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .landing-page h2 {
                    text-align: center;
                    font-size: 2.2rem;
                    margin-bottom: 2.5rem;
                }
                .hero {
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1rem;
                }
                .hero-subtitle {
                    font-size: 1.3rem;
                    margin-bottom: 2rem;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .hero-cta {
                    padding: 0.9rem 2rem;
                    border-radius: 30px;
                    background: var(--primary-color);
                    color: white;
                    text-decoration: none;
                    font-weight: 600;
                }
                .hero-cta.secondary {
                    background: transparent;
                    color: var(--primary-color);
                    border: 2px solid var(--primary-color);
                }
                .features-grid,
                .menu-grid,
                .info-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    gap: 2rem;
                }
                .feature-item,
                .menu-category,
                .info-card {
                    padding: 2rem;
                    border-radius: 16px;
                    background: #fdf8f3;
                }
                .feature-icon {
                    font-size: 2.5rem;
                }
                .menu-category ul {
                    list-style: none;
                    padding: 0;
                }
                .menu-category li {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.5rem 0;
                    border-bottom: 1px dashed #e0d5c8;
                }
                .price {
                    font-weight: 600;
                    color: var(--primary-color);
                }
                .contact-layout {
                    display: grid;
                    grid-template-columns: 1fr 2fr;
                    gap: 3rem;
                }
                .contact-item {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    margin-bottom: 1.2rem;
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1.2rem;
                }
                .form-group input,
                .form-group textarea {
                    padding: 0.8rem;
                    border: 1px solid #ccc;
                    border-radius: 8px;
                    font: inherit;
                }
                .submit-button {
                    padding: 0.9rem 2rem;
                    border: none;
                    border-radius: 30px;
                    background: var(--primary-color);
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .form-message {
                    display: none;
                    margin-top: 1rem;
                    padding: 1rem;
                    border-radius: 8px;
                }
                .form-message.success {
                    display: block;
                    background: #e6f4ea;
                    color: #1e6b34;
                }
                .form-message.error {
                    display: block;
                    background: #fdecea;
                    color: #a12622;
                }
                .footer {
                    text-align: center;
                    padding: 2rem;
                    background: var(--text-color);
                    color: white;
                }
                .footer a {
                    color: var(--secondary-color);
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.4rem;
                    }
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
