//! Generic submit pipeline shared by every form.
//!
//! A [`FormFlow`] declares the rules and the submit step; the
//! [`FormController`] owns the phase and runs validate → session → submit.

use std::{cell::Cell, rc::Rc};

use chrono::NaiveDate;

use crate::{
    api::ApiError,
    config::routes,
    state::session::SessionTokenStore,
    utils::time,
    validation::{FormFields, RuleSet, ValidationContext, ValidationError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Done,
    Failed,
}

impl Phase {
    pub fn is_pending(self) -> bool {
        matches!(self, Phase::Validating | Phase::Submitting)
    }
}

/// What a successful submit tells the page: a notice and where to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub notice: String,
    pub redirect: Option<&'static str>,
}

impl Completion {
    pub fn redirect(notice: impl Into<String>, to: &'static str) -> Self {
        Self {
            notice: notice.into(),
            redirect: Some(to),
        }
    }

    pub fn stay(notice: impl Into<String>) -> Self {
        Self {
            notice: notice.into(),
            redirect: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A submit is already in flight; nothing was done.
    Busy,
    Invalid(ValidationError),
    Failed(ApiError),
    /// The session is missing or was rejected. The token is gone.
    LoginRequired(ApiError),
    Completed(Completion),
}

impl SubmitOutcome {
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Completed(done) => done.redirect,
            SubmitOutcome::LoginRequired(_) => Some(routes::ACCOUNT),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(_))
    }
}

#[allow(async_fn_in_trait)]
pub trait FormFlow {
    fn rules(&self) -> &RuleSet;

    /// Flows that send the bearer token need one before any request.
    fn requires_session(&self) -> bool {
        false
    }

    async fn submit(&self, fields: &FormFields) -> Result<Completion, ApiError>;
}

pub struct FormController<F> {
    flow: Rc<F>,
    session: SessionTokenStore,
    phase: Rc<Cell<Phase>>,
    clock: fn() -> NaiveDate,
}

impl<F> Clone for FormController<F> {
    fn clone(&self) -> Self {
        Self {
            flow: Rc::clone(&self.flow),
            session: self.session.clone(),
            phase: Rc::clone(&self.phase),
            clock: self.clock,
        }
    }
}

impl<F: FormFlow> FormController<F> {
    pub fn new(flow: F, session: SessionTokenStore) -> Self {
        Self {
            flow: Rc::new(flow),
            session,
            phase: Rc::new(Cell::new(Phase::Idle)),
            clock: time::today,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn flow(&self) -> &F {
        &self.flow
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn is_pending(&self) -> bool {
        self.phase().is_pending()
    }

    pub async fn submit(&self, fields: &FormFields) -> SubmitOutcome {
        if self.is_pending() {
            log::debug!("submit ignored, another one is in flight");
            return SubmitOutcome::Busy;
        }

        self.phase.set(Phase::Validating);
        let ctx = ValidationContext::new((self.clock)());
        if let Err(err) = self.flow.rules().validate(fields, &ctx) {
            self.phase.set(Phase::Failed);
            return SubmitOutcome::Invalid(err);
        }

        if self.flow.requires_session() && !self.session.is_present() {
            self.session.clear();
            self.phase.set(Phase::Failed);
            return SubmitOutcome::LoginRequired(ApiError::auth(
                "Debes iniciar sesión para continuar",
            ));
        }

        self.phase.set(Phase::Submitting);
        match self.flow.submit(fields).await {
            Ok(done) => {
                self.phase.set(Phase::Done);
                SubmitOutcome::Completed(done)
            }
            Err(err) if err.is_auth() && self.flow.requires_session() => {
                self.session.clear();
                self.phase.set(Phase::Failed);
                SubmitOutcome::LoginRequired(err)
            }
            Err(err) => {
                log::warn!("submit failed: {err}");
                self.phase.set(Phase::Failed);
                SubmitOutcome::Failed(err)
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::validation::{fields, Rule};
    use std::cell::RefCell;

    struct Recording {
        rules: RuleSet,
        session: bool,
        calls: RefCell<Vec<FormFields>>,
        result: Result<Completion, ApiError>,
    }

    impl Recording {
        fn new(result: Result<Completion, ApiError>) -> Self {
            Self {
                rules: RuleSet::new(vec![Rule::Required {
                    field: fields::NOMBRE,
                    message: "nombre requerido",
                }]),
                session: false,
                calls: RefCell::new(Vec::new()),
                result,
            }
        }
    }

    impl FormFlow for Recording {
        fn rules(&self) -> &RuleSet {
            &self.rules
        }

        fn requires_session(&self) -> bool {
            self.session
        }

        async fn submit(&self, fields: &FormFields) -> Result<Completion, ApiError> {
            self.calls.borrow_mut().push(fields.clone());
            self.result.clone()
        }
    }

    fn ok_fields() -> FormFields {
        FormFields::new().with(fields::NOMBRE, "Ana")
    }

    #[tokio::test]
    async fn invalid_fields_never_reach_submit() {
        let controller = FormController::new(
            Recording::new(Ok(Completion::stay("ok"))),
            SessionTokenStore::in_memory(),
        );
        let outcome = controller.submit(&FormFields::new()).await;
        assert!(
            matches!(outcome, SubmitOutcome::Invalid(ref e) if e.message == "nombre requerido")
        );
        assert!(controller.flow().calls.borrow().is_empty());
        assert_eq!(controller.phase(), Phase::Failed);
    }

    #[tokio::test]
    async fn completed_submit_reports_redirect() {
        let controller = FormController::new(
            Recording::new(Ok(Completion::redirect("listo", routes::RESERVATIONS))),
            SessionTokenStore::in_memory(),
        );
        let outcome = controller.submit(&ok_fields()).await;
        assert_eq!(outcome.redirect(), Some(routes::RESERVATIONS));
        assert_eq!(controller.phase(), Phase::Done);
    }

    #[tokio::test]
    async fn session_flow_without_token_asks_for_login() {
        let mut flow = Recording::new(Ok(Completion::stay("ok")));
        flow.session = true;
        let controller = FormController::new(flow, SessionTokenStore::in_memory());
        let outcome = controller.submit(&ok_fields()).await;
        assert!(matches!(outcome, SubmitOutcome::LoginRequired(_)));
        assert_eq!(outcome.redirect(), Some(routes::ACCOUNT));
        assert!(controller.flow().calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn auth_failure_only_clears_session_flows() {
        let store = SessionTokenStore::in_memory();
        store.set("tok").unwrap();
        let controller = FormController::new(
            Recording::new(Err(ApiError::auth("Token Inválido"))),
            store.clone(),
        );
        let outcome = controller.submit(&ok_fields()).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert!(store.is_present());

        let mut flow = Recording::new(Err(ApiError::auth("Token Inválido")));
        flow.session = true;
        let controller = FormController::new(flow, store.clone());
        let outcome = controller.submit(&ok_fields()).await;
        assert!(matches!(outcome, SubmitOutcome::LoginRequired(_)));
        assert!(!store.is_present());
    }

    #[tokio::test]
    async fn controller_can_be_resubmitted_after_failure() {
        let controller = FormController::new(
            Recording::new(Err(ApiError::api("caído"))),
            SessionTokenStore::in_memory(),
        );
        assert!(matches!(
            controller.submit(&ok_fields()).await,
            SubmitOutcome::Failed(_)
        ));
        assert!(matches!(
            controller.submit(&ok_fields()).await,
            SubmitOutcome::Failed(_)
        ));
        assert_eq!(controller.flow().calls.borrow().len(), 2);
    }
}
