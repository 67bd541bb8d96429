//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::guards::{AdminRoute, PrivateRoute, ProfileCompletionRoute};
use crate::components::nav_bar::NavBar;
use crate::pages::{
    account::AccountPage, admin::AdminPage, complete_profile::CompleteProfilePage, faq::FaqPage,
    home::HomePage, login::LoginPage, oauth_callback::OauthCallbackPage, register::RegisterPage,
    services::ServicesPage, trips::TripsPage,
};
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and sets up client-side routing. The
/// persisted session is restored synchronously before the first render
/// of any guarded route, so restoration never causes a redirect flash.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    provide_context(session);
    #[cfg(feature = "hydrate")]
    session.restore();

    view! {
        <Stylesheet id="leptos" href="/pkg/privyde-web.css"/>
        <Title text="Privyde"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("faq") view=FaqPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("google"))
                        view=OauthCallbackPage
                    />
                    <ParentRoute path=StaticSegment("trips") view=PrivateRoute>
                        <Route path=StaticSegment("") view=TripsPage/>
                    </ParentRoute>
                    <ParentRoute path=StaticSegment("account") view=PrivateRoute>
                        <Route path=StaticSegment("") view=AccountPage/>
                    </ParentRoute>
                    <ParentRoute path=StaticSegment("complete-profile") view=ProfileCompletionRoute>
                        <Route path=StaticSegment("") view=CompleteProfilePage/>
                    </ParentRoute>
                    <ParentRoute path=StaticSegment("admin") view=AdminRoute>
                        <Route path=StaticSegment("") view=AdminPage/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}
