//! Cookie-backed identity storage for HTTP handlers.
//!
//! [`SessionContext`] wraps the Actix session so the domain
//! [`SessionStore`] can persist the signed-in identity in the encrypted
//! session cookie without knowing about Actix. Handlers build one store per
//! request with [`SessionContext::session_store`].

use std::sync::Arc;

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::ports::{
    CredentialProvider, IDENTITY_KEY, IdentityStore, IdentityStoreError, SimulatedLatency,
};
use crate::domain::{Error, GuardDecision, Identity, SessionStore, guard, restore_snapshot};

/// Newtype wrapper that exposes the identity slot of the Actix session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Restored session store for this request.
    ///
    /// A tampered or outdated cookie is discarded and the visitor treated as
    /// signed out.
    pub fn session_store(
        &self,
        credentials: Arc<dyn CredentialProvider>,
        latency: Arc<dyn SimulatedLatency>,
    ) -> Result<SessionStore<SessionContext>, Error> {
        let mut store = SessionStore::new(self.clone(), credentials, latency);
        store.restore()?;
        Ok(store)
    }

    /// Require a signed-in identity or return `401 Unauthorized`.
    ///
    /// Runs the route guard for a protected view over the restored cookie;
    /// a redirect to the login page becomes the 401.
    pub fn require_identity(&self) -> Result<Identity, Error> {
        let snapshot = restore_snapshot(self)?;
        match guard(&snapshot, true) {
            GuardDecision::Render => snapshot
                .identity
                .ok_or_else(|| Error::unauthorized("login required")),
            GuardDecision::Loading | GuardDecision::Redirect { .. } => {
                Err(Error::unauthorized("login required"))
            }
        }
    }
}

impl IdentityStore for SessionContext {
    fn load(&self) -> Result<Option<Identity>, IdentityStoreError> {
        self.0
            .get::<Identity>(IDENTITY_KEY)
            .map_err(|error| IdentityStoreError::decode(error.to_string()))
    }

    fn save(&self, identity: &Identity) -> Result<(), IdentityStoreError> {
        self.0
            .insert(IDENTITY_KEY, identity)
            .map_err(|error| IdentityStoreError::encode(error.to_string()))?;
        self.0.renew();
        Ok(())
    }

    fn clear(&self) -> Result<(), IdentityStoreError> {
        self.0.remove(IDENTITY_KEY);
        Ok(())
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DisplayName, EmailAddress, IdentityId, Role};
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    fn session_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().wrap(crate::inbound::http::test_utils::test_session_middleware())
    }

    fn agent() -> Identity {
        Identity::new(
            IdentityId::new("2").expect("fixture id"),
            DisplayName::new("Agent User").expect("fixture name"),
            EmailAddress::new("agent@example.com").expect("fixture email"),
            Role::Agent,
        )
    }

    #[actix_web::test]
    async fn round_trips_identity() {
        let app = test::init_service(
            session_test_app()
                .route(
                    "/set",
                    web::get().to(|session: SessionContext| async move {
                        session
                            .save(&agent())
                            .map_err(|err| Error::internal(err.to_string()))?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                )
                .route(
                    "/get",
                    web::get().to(|session: SessionContext| async move {
                        let identity = session.require_identity()?;
                        Ok::<_, Error>(HttpResponse::Ok().body(identity.email().to_string()))
                    }),
                ),
        )
        .await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        assert_eq!(set_res.status(), StatusCode::OK);
        let cookie = set_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set");

        let get_res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/get")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(get_res.status(), StatusCode::OK);
        let body = test::read_body(get_res).await;
        assert_eq!(body, "agent@example.com");
    }

    #[actix_web::test]
    async fn missing_identity_is_unauthorised() {
        let app = test::init_service(session_test_app().route(
            "/require",
            web::get().to(|session: SessionContext| async move {
                let _ = session.require_identity()?;
                Ok::<_, Error>(HttpResponse::Ok())
            }),
        ))
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/require").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn tampered_identity_is_unauthorised() {
        let app = test::init_service(
            session_test_app()
                .route(
                    "/set-invalid",
                    web::get().to(|session: Session| async move {
                        session
                            .insert(IDENTITY_KEY, serde_json::json!({"id": "1", "role": "root"}))
                            .expect("set invalid identity");
                        HttpResponse::Ok()
                    }),
                )
                .route(
                    "/require",
                    web::get().to(|session: SessionContext| async move {
                        let _ = session.require_identity()?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                ),
        )
        .await;

        let set_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/set-invalid").to_request(),
        )
        .await;
        let cookie = set_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set");

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/require")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
