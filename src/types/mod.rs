//! Request and response payloads.

#[macro_use]
mod macros;

mod common;
mod proof;
mod session;
mod verification;
mod verification_request;
mod webhook;

pub use common::{Pagination, PaginatedList, ParseEnumError};
pub use proof::{
    OfflineProofPayload, OfflineVerification, ProofValidation, RevocationList, RevokeResponse,
    RevokedProof, ValidatedVerification,
};
pub use session::{ContextAction, CreateSessionParams, Session, SessionChannel, SessionContext};
pub use verification::{
    ChallengeInstructions, CreateVerificationParams, DnsRecord, DomainCheckResponse,
    DomainProvider, DomainVerification, DomainVerificationMethod, HttpFile, ListVerificationsParams,
    ListVerifiedUsersParams, ProofToken, ResendResponse, StartDomainVerificationParams,
    TestVerifyResponse, Verification, VerificationChannel, VerificationStatus, VerificationType,
    VerifiedUser, VerifiedUserVerification,
};
pub use verification_request::{
    ActionType, CreateVerificationRequestParams, ListVerificationRequestsParams, RequestedAsset,
    VerificationRequest, VerificationRequestAsset, VerificationRequestStatus,
};
pub use webhook::{
    DeliveryStatusCounts, ListWebhookDeliveriesParams, WebhookDelivery, WebhookDeliveryList,
    WebhookDeliveryStats, WebhookDeliveryStatus, WebhookPagination, WebhookRetryResponse,
};
