fn main() {
    clinic_admin_lib::run()
}
