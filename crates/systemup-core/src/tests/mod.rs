mod controller;
mod power_setting;
mod uptime;
