// Application Layer - Use Cases and Business Logic

pub mod locks;
pub mod onboarding;
pub mod queue;
pub mod retry;

// Re-exports
pub use locks::QueueLocks;
pub use onboarding::OnboardingService;
pub use queue::QueueService;
pub use retry::{RetryDecision, RetryPolicy};
