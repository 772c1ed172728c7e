//! Embedded training set for the phishing model

use phishguard_core::{Label, LabeledExample};

/// Labeled phrases the default model is trained on at startup
pub const TRAINING_SET: &[LabeledExample] = &[
    // Phishing
    LabeledExample::phishing("Verify your bank account immediately"),
    LabeledExample::phishing("Click this link to win prize"),
    LabeledExample::phishing("Urgent update your account now"),
    LabeledExample::phishing("Your account has been suspended verify now"),
    LabeledExample::phishing("Unauthorized login attempt detected confirm immediately"),
    LabeledExample::phishing("Reset your password to avoid account lock"),
    LabeledExample::phishing("Security alert update banking information"),
    LabeledExample::phishing("Confirm your identity to restore access"),
    LabeledExample::phishing("Your payment was declined update details now"),
    LabeledExample::phishing("Final warning respond immediately"),
    LabeledExample::phishing("Your account will be permanently closed"),
    LabeledExample::phishing("Failure to act will result in suspension"),
    LabeledExample::phishing("Legal notice verify your account now"),
    LabeledExample::phishing("Immediate action required confirm details"),
    LabeledExample::phishing("Congratulations you won a free iPhone"),
    LabeledExample::phishing("Claim your free gift card now"),
    LabeledExample::phishing("You are selected as a lucky winner"),
    LabeledExample::phishing("Get free diamonds click here"),
    LabeledExample::phishing("Exclusive reward waiting claim now"),
    LabeledExample::phishing("Sign in to resolve account issue"),
    LabeledExample::phishing("Login immediately to prevent deactivation"),
    LabeledExample::phishing("Verify your email password now"),
    LabeledExample::phishing("Update login credentials immediately"),
    LabeledExample::phishing("Your package delivery is pending confirm address"),
    LabeledExample::phishing("Shipment on hold update shipping details"),
    LabeledExample::phishing("Track parcel by confirming payment"),
    LabeledExample::phishing("Tax refund available submit bank details"),
    LabeledExample::phishing("Government payment waiting verify identity"),
    LabeledExample::phishing("IRS notice unpaid taxes respond now"),
    LabeledExample::phishing("Double your bitcoin investment today"),
    LabeledExample::phishing("Limited crypto investment opportunity"),
    LabeledExample::phishing("Payment failed update billing information"),
    LabeledExample::phishing("Confirm credit card to continue service"),
    LabeledExample::phishing("Invoice overdue click to pay now"),
    LabeledExample::phishing("Email access restricted verify immediately"),
    LabeledExample::phishing("Technical issue detected confirm account"),
    LabeledExample::phishing("Suspicious activity verify your profile"),
    LabeledExample::phishing("Confirm login attempt from new device"),
    LabeledExample::phishing("Click here to unlock reward"),
    LabeledExample::phishing("Important notification verify now"),
    // Safe
    LabeledExample::safe("Meeting tomorrow at 10am"),
    LabeledExample::safe("Your salary has been credited"),
    LabeledExample::safe("Project discussion at 5pm"),
    LabeledExample::safe("Lets schedule a call for Monday"),
    LabeledExample::safe("Please review the attached report"),
    LabeledExample::safe("The presentation slides are ready"),
    LabeledExample::safe("Team lunch scheduled for Friday"),
    LabeledExample::safe("Budget approval meeting next week"),
    LabeledExample::safe("Client feedback has been received"),
    LabeledExample::safe("Quarterly performance review scheduled"),
    LabeledExample::safe("Submit your timesheet by Friday"),
    LabeledExample::safe("The server maintenance is complete"),
    LabeledExample::safe("Reminder about tomorrow workshop"),
    LabeledExample::safe("HR policy document updated"),
    LabeledExample::safe("Training session starts at 2pm"),
    LabeledExample::safe("Conference room has been booked"),
    LabeledExample::safe("New employee onboarding session"),
    LabeledExample::safe("Monthly report has been shared"),
    LabeledExample::safe("Please check the shared folder"),
    LabeledExample::safe("The invoice has been processed"),
    LabeledExample::safe("Marketing campaign results attached"),
    LabeledExample::safe("Your leave request is approved"),
    LabeledExample::safe("Office will remain closed on Monday"),
    LabeledExample::safe("System update completed successfully"),
    LabeledExample::safe("Team outing planned this weekend"),
    LabeledExample::safe("Project deadline extended to next week"),
    LabeledExample::safe("Please confirm your attendance"),
    LabeledExample::safe("Your reimbursement has been processed"),
    LabeledExample::safe("Internal audit scheduled next month"),
    LabeledExample::safe("Weekly sync meeting link shared"),
    LabeledExample::safe("Please confirm receipt of this document"),
    LabeledExample::safe("Account summary has been generated"),
    LabeledExample::safe("Let me know if you need any details"),
    LabeledExample::safe("We noticed a discrepancy in the report"),
    LabeledExample::safe("Kindly review the attached file"),
    LabeledExample::safe("Please confirm receipt of the updated project document"),
    LabeledExample::safe("The account summary for this quarter has been generated successfully"),
    LabeledExample::safe("Kindly review the meeting notes and share your feedback"),
    LabeledExample::safe("The finance team processed the payment yesterday"),
    LabeledExample::safe("Let me know if you need any additional details regarding the report"),
];

/// Number of examples carrying the given label
pub fn count(label: Label) -> usize {
    TRAINING_SET.iter().filter(|e| e.label == label).count()
}
