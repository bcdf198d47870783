//! Site footer with quick links.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__about">
                    <h3>"RentIt"</h3>
                    <p>"Find your perfect home with ease. Browse thousands of rental properties."</p>
                </div>
                <div class="footer__links">
                    <h4>"Quick Links"</h4>
                    <ul>
                        <li><a href="/">"Home"</a></li>
                        <li><a href="/search">"Browse Properties"</a></li>
                        <li><a href="/login">"Login"</a></li>
                        <li><a href="/register">"Sign Up"</a></li>
                    </ul>
                </div>
                <div class="footer__links">
                    <h4>"For Owners"</h4>
                    <ul>
                        <li><a href="/owner/dashboard">"List Your Property"</a></li>
                    </ul>
                </div>
            </div>
            <p class="footer__copyright">"© RentIt. All rights reserved."</p>
        </footer>
    }
}
