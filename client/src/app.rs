//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the process-wide contexts: auth state, the session event
//! registry, toasts and the notification feed. Its session subscription is
//! installed on mount and removed in `on_cleanup`, so the listener lives
//! exactly as long as the mounted app.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::{
    auth::AuthPage, create_object::CreateObjectPage, edit_object::EditObjectPage, home::HomePage,
    my_objects::MyObjectsPage, not_found::NotFoundPage, object_detail::ObjectDetailPage, profile::ProfilePage,
    propose_trade::ProposeTradePage, trades::TradesPage,
};
use crate::state::auth::AuthState;
use crate::state::notifications::NotificationsState;
use crate::state::session::{SessionEvent, SessionEvents};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    let notifications = RwSignal::new(NotificationsState::default());
    let events = SessionEvents::default();

    provide_context(auth);
    provide_context(toasts);
    provide_context(notifications);
    provide_context(events.clone());

    let subscription = events.subscribe({
        #[cfg(feature = "hydrate")]
        let events = events.clone();
        move |event: &SessionEvent| {
            crate::util::session::persist(event);
            auth.try_update(|a| a.apply(event));
            if matches!(event, SessionEvent::SignedOut) {
                notifications.try_update(NotificationsState::clear);
            }
            #[cfg(feature = "hydrate")]
            {
                if let Some(session) = event.session() {
                    if auth.try_with_untracked(|a| crate::state::auth::needs_profile(a, event)).unwrap_or(false) {
                        crate::util::session::load_profile(auth, session.user.id.clone());
                    }
                }
                if let Some(session) = event.session() {
                    crate::util::session::schedule_refresh(events.clone(), auth, session.clone());
                }
            }
        }
    });
    let cleanup_events = events.clone();
    on_cleanup(move || {
        cleanup_events.unsubscribe(subscription);
    });

    #[cfg(feature = "hydrate")]
    crate::util::session::restore(events);

    view! {
        <Stylesheet id="leptos" href="/pkg/circula.css"/>
        <Title text="Circula"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("objeto"), ParamSegment("id")) view=ObjectDetailPage/>
                <Route path=StaticSegment("cadastrar-objeto") view=CreateObjectPage/>
                <Route path=StaticSegment("perfil") view=ProfilePage/>
                <Route path=StaticSegment("meus-objetos") view=MyObjectsPage/>
                <Route path=StaticSegment("minhas-trocas") view=TradesPage/>
                <Route path=(StaticSegment("propor-troca"), ParamSegment("id")) view=ProposeTradePage/>
                <Route path=(StaticSegment("editar-objeto"), ParamSegment("id")) view=EditObjectPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
