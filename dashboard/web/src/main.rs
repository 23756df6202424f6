// Advisor dashboard, browser entry point (built with trunk).

fn main() {
    advisor_dashboard_web::start();
}
