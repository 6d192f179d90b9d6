pub mod a001_campaign;
pub mod a002_invite;
pub mod a003_coupon;
pub mod a004_voucher;
pub mod a005_event;
pub mod a006_branch_profile;
pub mod a007_user_account;
pub mod a008_guest_list;
pub mod a009_receipt;
pub mod a010_my_coupon;
pub mod a011_sales_event;
