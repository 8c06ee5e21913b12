mod dashboard;
pub use dashboard::{Dashboard, Home};

mod reports;
pub use reports::{Quarterly, ReportOne, ReportTwo};

mod branches;
pub use branches::Branches;
