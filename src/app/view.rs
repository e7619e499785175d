#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Homepage,
    VotingDashboard,
    AdminPanel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    Login,
    Register,
}

#[derive(Default, Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Default, Debug)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
