use {
    super::{WinCtx, WindowOpen},
    crate::shell::msg_if_fail,
};

#[derive(Default)]
pub struct AboutWindow {
    pub open: WindowOpen,
}

impl super::Window for AboutWindow {
    fn ui(&mut self, WinCtx { ui, gui, .. }: WinCtx) {
        ui.heading(format!("remid {}", env!("CARGO_PKG_VERSION")));
        ui.label("Cisco DHCPv6 Remote-ID mapper and editor");
        ui.separator();
        ui.heading("Links");
        ui.vertical_centered_justified(|ui| {
            if ui.link("dhcpkit_cisco (original mapper)").clicked() {
                let result = open::that("https://github.com/sjm-steffann/dhcpkit_cisco");
                msg_if_fail(result, "Failed to open link", &mut gui.msg_dialog);
            }
            if ui.link("Remote-ID format discussion").clicked() {
                let result = open::that(
                    "https://supportforums.cisco.com/discussion/11349231/ipv6-dhcp-relay-and-remote-identifier-option-37",
                );
                msg_if_fail(result, "Failed to open link", &mut gui.msg_dialog);
            }
            ui.separator();
            if ui.button("Close").clicked() {
                self.open.set(false);
            }
        });
    }

    fn title(&self) -> &str {
        "About remid"
    }
}
